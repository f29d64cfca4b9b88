//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (headers, logging, compression, etc.)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, normalise_cache_headers, request_id};
use crate::routes::{api_info, health, not_found, v1, v2};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (applied in reverse order):
/// 1. Request ID tracking
/// 2. Request logging and metrics
/// 3. Cache/CORS header normalisation for `/api/*`
/// 4. Compression
/// 5. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    let ops_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics));

    let v1_routes = Router::new()
        .route("/api/v1/list-routes", get(v1::list_routes))
        .route("/api/v1/{locale}/homepage", get(v1::homepage))
        .route("/api/v1/{locale}/promoted-news", get(v1::promoted_news))
        .route("/api/v1/{locale}/funding-programmes", get(v1::funding_programmes))
        .route("/api/v1/{locale}/funding-programme/{slug}", get(v1::funding_programme))
        .route("/api/v1/{locale}/listing", get(v1::listing))
        .route("/api/v1/{locale}/case-studies", get(v1::case_studies))
        .route("/api/v1/{locale}/profiles/{section}", get(v1::profiles))
        .route("/api/v1/{locale}/surveys", get(v1::surveys));

    let v2_routes = Router::new()
        .route("/api/v2/{locale}/funding-programmes", get(v2::funding_programmes))
        .route("/api/v2/{locale}/funding-programmes/{slug}", get(v2::funding_programme))
        .route("/api/v2/{locale}/our-people", get(v2::our_people))
        .route("/api/v2/{locale}/research", get(v2::research))
        .route("/api/v2/{locale}/research/{slug}", get(v2::research_document))
        .route("/api/v2/{locale}/updates/{update_type}", get(v2::updates))
        .route("/api/v2/{locale}/updates/{update_type}/{slug}", get(v2::update));

    Router::new()
        .merge(ops_routes)
        .merge(v1_routes)
        .merge(v2_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(from_fn(normalise_cache_headers))
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the content API HTTP server
///
/// Loads the content snapshot and site configuration, then serves requests
/// until SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    let mut state = ServerState::new(config.clone())?;
    if config.metrics_enabled {
        let handle = PrometheusBuilder::new().install_recorder()?;
        state = state.with_metrics(handle);
    }

    let app = build_router(Arc::new(state));

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        addr = %addr,
        timeout_secs = config.timeout_secs,
        metrics = config.metrics_enabled,
        "Starting content API server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
