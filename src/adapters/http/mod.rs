//! HTTP JSON API over the calculator.
//!
//! ```text
//! axum router ──► handlers ──► Calculator (evaluate / convert)
//!                          └─► MemoryStore (per X-Session-Id)
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::{create_router, RouterOptions};
pub use state::AppState;

use crate::utils::error::Result;
use tokio::net::TcpListener;

/// Serve `router` on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, router: axum::Router) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Advanced Calculator API running on http://{}", addr);
    tracing::info!("API documentation: http://{}/api", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
