//! Chat API Handlers
//!
//! HTTP handlers for the savings summary endpoint and the liveness root.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    api::{
        app_state::AppState,
        dto::chat_dto::{ChatRequest, ChatResponse, RootResponse},
    },
    error::AppError,
    models::FinancialProfile,
};

/// Compute a savings summary for a financial profile
///
/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    state.metrics.record_http_request();

    // Malformed bodies (non-numeric amounts, unknown prompt_source) are
    // the one client error this endpoint surfaces.
    let Json(request) = payload.map_err(|rejection| {
        state.metrics.record_error();
        AppError::Validation(rejection.body_text())
    })?;

    let request_id = Uuid::new_v4();
    state.metrics.record_chat_request();
    debug!(%request_id, user_id = %request.user_id, source = ?request.prompt_source, "Handling chat summary request");

    let profile = FinancialProfile::from(request);
    let result = state.summary_service.compute_summary(&profile).await;

    Ok(Json(ChatResponse::from(result)))
}

/// Liveness message
///
/// GET /
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.record_http_request();
    Json(RootResponse {
        message: "Finchat backend is running!".to_string(),
    })
}
