//! MeetSync - meeting scheduling service
//!
//! Main entry point for the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use meetsync_server::{router, AppContext};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "no .env file loaded"),
    }

    let ctx = Arc::new(AppContext::new().context("failed to initialise application context")?);

    let addr: SocketAddr = ctx
        .config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", ctx.config.server.bind_addr))?;

    let app = router(ctx);

    info!(%addr, "meetsync-server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
