//! HTTP server: webhook and health routes, graceful shutdown.

pub mod handlers;

use crate::core::integration::OrderIntegration;
use crate::core::OrderForwarder;
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const WEBHOOK_PATH: &str = "/webhook/mercus-order";
pub const HEALTH_PATH: &str = "/health";

/// Builds the router for the webhook and health endpoints.
pub fn create_router<F: OrderForwarder + 'static>(integration: Arc<OrderIntegration<F>>) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(handlers::receive_mercus_order::<F>))
        .route(HEALTH_PATH, get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(integration)
}

/// Binds `addr` and serves until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns `BridgeError::IoError` when the address cannot be bound.
pub async fn start_server<F: OrderForwarder + 'static>(
    integration: Arc<OrderIntegration<F>>,
    addr: SocketAddr,
) -> Result<()> {
    let app = create_router(integration);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!("🚀 Integration server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received CTRL+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
