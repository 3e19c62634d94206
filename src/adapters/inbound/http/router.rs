use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{handle_storage_event, health};
use crate::ports::services::ThumbnailService;

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub thumbnail_service: Arc<dyn ThumbnailService>,
}

/// Create the trigger router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handle_storage_event))
        .route("/healthz", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
