// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::aggregator::StatusAggregator;
use crate::models::WatchTarget;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) aggregator: Arc<StatusAggregator>,
    pub(crate) target: Arc<WatchTarget>,
}

pub fn app(aggregator: Arc<StatusAggregator>, target: WatchTarget) -> Router {
    let state = AppState {
        aggregator,
        target: Arc::new(target),
    };
    Router::new()
        .route("/status", get(http::status_handler)) // GET /status
        .route("/health", get(http::health_handler)) // GET /health
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/info", get(http::api_info_handler)) // GET /api/info
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
