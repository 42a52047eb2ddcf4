//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;

use crate::api::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn create_router(app_state: AppState) -> Router {
    // CORS open to all origins so any frontend can call the demo backend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::chat_handler::root))
        .route("/chat", post(handlers::chat_handler::chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
