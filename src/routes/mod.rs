//! HTTP routes for the proxy
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod chat;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{any, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/v1/chat/completions",
            post(chat::chat_completions).fallback(chat::method_not_allowed),
        )
        .route("/health", any(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
