#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    // A missing .env is normal in production.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "bad configuration"))?;
    let app = routes::app().inspect_err(|e| tracing::error!(error = %e, "router setup failed"))?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "fraido listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
