use crate::api;
use prizedraw_core::{DrawService, Result};
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn handle_serve_command(service: DrawService, bind: SocketAddr) -> Result<()> {
    let status = service.status();
    tracing::info!(
        "Serving draw of {} entries (sequence {}) on http://{}",
        status.total,
        status.sequence_id,
        bind
    );

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, api::app(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
