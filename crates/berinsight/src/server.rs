//! HTTP server startup and routing.
//!
//! Every handler independently re-reads the persisted document, so the
//! router carries nothing but the resolved configuration. The only
//! blocking work per request is one small synchronous file read.

use tracing::{info, warn};

use crate::api;
use crate::config::Config;
use crate::metrics;
use crate::state::AppState;

pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    crate::telemetry::init_tracing();
    metrics::init_metrics();
    cfg.print_config();

    if cfg.data_path.exists() {
        info!("Data file exists at {}", cfg.data_path.display());
    } else {
        warn!("Data file not found at {}", cfg.data_path.display());
    }

    let state = AppState::new(cfg.clone());

    info!("Starting HTTP server on {}:{}", cfg.api_host, cfg.api_port);
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", cfg.api_host, cfg.api_port)).await?;

    let app = build_router(state, cfg.request_timeout_seconds);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, timeout_seconds: u64) -> axum::Router {
    use axum::{routing::get, Router};
    use std::time::Duration;
    use tower_http::{
        cors::{Any, CorsLayer},
        timeout::TimeoutLayer,
        trace::TraceLayer,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::health_api::root))
        .route("/healthz", get(api::health_api::health_check))
        .route("/metrics", get(metrics::get_metrics))
        .route("/insights", get(api::insights_api::list_insights))
        .route("/insights/complaints", get(api::breakdown_api::get_complaints))
        .route("/insights/suggestions", get(api::breakdown_api::get_suggestions))
        .route("/insights/sentiment", get(api::sentiment_api::get_sentiment))
        .route("/insights/trends", get(api::trends_api::get_trends))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds)))
        .with_state(state)
}
