//! Application startup and lifecycle management.

use crate::config::BlueprintConfig;
use crate::handlers::{
    blueprint::generate_blueprint,
    health::{health_check, readiness_check},
    metrics::metrics,
};
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::providers::TextProvider;
use crate::services::BlueprintGenerator;
use axum::{
    middleware::from_fn,
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub const BLUEPRINT_ROUTE: &str = "/api/generate-blueprint";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: BlueprintGenerator,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            generator: BlueprintGenerator::new(provider),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(BLUEPRINT_ROUTE, any(generate_blueprint))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        // route_layer so the matched path is known when recording
        .route_layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            })
            // The blueprint handler logs its own failures.
            .on_failure(()),
        )
        // Outermost, so the trace span already sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: BlueprintConfig) -> Result<Self, AppError> {
        let provider = GeminiTextProvider::new(config.gemini.clone())
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %provider.model(),
            api_key_configured = config.gemini.has_api_key(),
            "Initialized Gemini text provider"
        );
        if !config.gemini.has_api_key() {
            tracing::warn!("GEMINI_API_KEY is not set; blueprint requests will fail");
        }

        // Port 0 = random port for testing
        let addr = config.common.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Blueprint service listening on port {}", port);

        let router = build_router(AppState::new(Arc::new(provider)));

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

    /// Serve until Ctrl+C or SIGTERM.
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
