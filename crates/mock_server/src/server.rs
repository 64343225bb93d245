//! Mock calendar server for development and testing.

use std::net::{IpAddr, SocketAddr};

use tokio::{net::TcpListener, task::JoinHandle};

use crate::{app::create_app, state::ServerState};

/// Mock calendar server that serves the REST API from memory.
pub struct MockCalendarServer {
    addr: SocketAddr,
    state: ServerState,
}

impl MockCalendarServer {
    /// Create a new server accepting `api_token`.
    ///
    /// # Arguments
    /// * `host` - The address to bind to
    /// * `port` - The port to listen on (`0` picks a free one)
    pub fn new(host: IpAddr, port: u16, api_token: impl Into<String>) -> Self {
        Self {
            addr: SocketAddr::new(host, port),
            state: ServerState::new(api_token.into()),
        }
    }

    /// Run the server until the process exits.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Mock calendar server listening on http://{}", listener.local_addr()?);
        axum::serve(listener, create_app(self.state)).await
    }

    /// Bind and serve on a background task, returning the bound address.
    ///
    /// Call `abort()` on the returned handle to stop serving.
    pub async fn spawn(self) -> Result<(SocketAddr, JoinHandle<()>), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        let app = create_app(self.state);
        tracing::debug!(%addr, "Spawned mock calendar server");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "Mock calendar server stopped");
            }
        });
        Ok((addr, handle))
    }
}
