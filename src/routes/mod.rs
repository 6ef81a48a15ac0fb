use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod health;
pub mod webhook;

// Build the router without binding state; it is provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/webhook", post(webhook::webhook))
}
