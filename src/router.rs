use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::handlers;
use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/order", post(handlers::order::create_order))
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}
