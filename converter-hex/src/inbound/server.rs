//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use converter_types::ExchangeRateProvider;

use super::handlers::{self, AppState, ErrorStatusMode};
use crate::CurrencyService;

/// HTTP Server for the currency converter.
pub struct HttpServer<P: ExchangeRateProvider> {
    state: Arc<AppState<P>>,
}

impl<P: ExchangeRateProvider> HttpServer<P> {
    /// Creates a new HTTP server that reports every failure as 500.
    pub fn new(service: CurrencyService<P>) -> Self {
        Self::with_status_mode(service, ErrorStatusMode::default())
    }

    /// Creates a new HTTP server with the given failure status mode.
    pub fn with_status_mode(service: CurrencyService<P>, status_mode: ErrorStatusMode) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                status_mode,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi))
            .route("/convert", post(handlers::convert::<P>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
