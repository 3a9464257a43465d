//! Application startup and lifecycle management.

use crate::config::AstroConfig;
use crate::handlers::{
    generate_from_chart, generate_music, health_check, index, metrics::metrics, not_found,
};
use crate::services::{Composer, PlaceholderComposer};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::permissive_cors_layer,
    metrics::metrics_middleware,
    panic::catch_panic_layer,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<dyn Composer>,
}

impl AppState {
    pub fn new(composer: Arc<dyn Composer>) -> Self {
        Self { composer }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate_music))
        .route("/api/astro", post(generate_from_chart))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_cors_layer())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the placeholder composer.
    pub async fn build(config: AstroConfig) -> Result<Self, AppError> {
        Self::build_with_composer(config, Arc::new(PlaceholderComposer::new())).await
    }

    pub async fn build_with_composer(
        config: AstroConfig,
        composer: Arc<dyn Composer>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let address = config.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            composer = composer.name(),
            "AstroTunes service: HTTP on {}:{}",
            config.common.host,
            port
        );

        let router = build_router(AppState::new(composer));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
