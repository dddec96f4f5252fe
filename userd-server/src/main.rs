use tracing_subscriber::EnvFilter;

use userd_server::{run_server, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    run_server(ServerConfig::default()).await
}
