//! Axum Router Configuration
//!
//! One page, three actions: submit a problem, clear the conversation,
//! download the export file.

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/solve", post(handlers::solve))
        .route("/clear", post(handlers::clear))
        .route("/export", get(handlers::export))
        .with_state(app_state)
}
