use std::sync::Arc;

use crate::store::InMemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct ServerState {
    /// The only bearer token the server accepts.
    pub api_token: Arc<str>,
    pub store: InMemoryStore,
}

impl ServerState {
    pub fn new(api_token: impl Into<Arc<str>>) -> Self {
        Self {
            api_token: api_token.into(),
            store: InMemoryStore::new(),
        }
    }
}
