//! HTTP server initialization and runtime setup.
//!
//! Wires the webhook transport into the delivery loop and runs the Axum
//! server until shutdown.

use crate::application::services::{ArticleService, RetryingDeliverer};
use crate::config::Config;
use crate::infrastructure::webhook::{HttpWebhookTransport, TokioSleeper};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state for the configured webhook.
///
/// # Errors
///
/// Returns an error if the webhook URL is invalid or the HTTP client cannot
/// be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let delivery = config.delivery()?;

    let transport = HttpWebhookTransport::new(delivery.webhook_url, delivery.attempt_timeout)
        .context("Failed to build webhook HTTP client")?;
    let deliverer = RetryingDeliverer::new(
        Arc::new(transport),
        Arc::new(TokioSleeper),
        delivery.schedule,
    );

    let article_service = ArticleService::new(Arc::new(deliverer));

    Ok(AppState::new(Arc::new(article_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops accepting connections on Ctrl+C, waits for in-flight requests, then
/// waits for delivery sequences whose client already disconnected.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("Webhook delivery ready");

    let article_service = state.article_service.clone();
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    article_service.drain().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
