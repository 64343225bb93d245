//! uoacal-mock-server entry point.

use std::net::IpAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uoacal_mock_server::MockCalendarServer;

/// In-memory calendar API server
#[derive(Parser, Debug)]
#[command(name = "uoacal-mock-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "127.0.0.1", env = "HOST")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Bearer token clients must present
    #[arg(long, env = "UOACAL_API_TOKEN")]
    api_token: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uoacal_mock_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    MockCalendarServer::new(cli.host, cli.port, cli.api_token)
        .run()
        .await?;

    Ok(())
}
