// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::status::StatusAssembler;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) assembler: Arc<StatusAssembler>,
}

pub fn app(assembler: Arc<StatusAssembler>) -> Router {
    let state = AppState { assembler };
    Router::new()
        .route("/", get(|| async { "Balancer status service" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/status", get(http::status_handler)) // GET /status?secret=...
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
