// Gateway module for the HTTP API - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod ai;
mod error;
mod health;
mod placeholders;
mod routes;
mod users;

// Public re-exports - the ONLY way to access server functionality
pub use error::ApiError;
pub use routes::create_router;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::app::AppState;
use crate::constants::SERVICE_NAME;
use crate::utils::{log_info, log_warn};

/// Bind and serve the API until Ctrl+C
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    log_info(
        "🚀",
        format!("Starting {} in {} mode", SERVICE_NAME, state.server.environment),
    );

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log_info("🌐", format!("Listening on http://{}", addr));

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log_info("🛑", "Shutting down API");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_warn("⚠️", format!("Failed to listen for shutdown signal: {}", e));
    }
}
