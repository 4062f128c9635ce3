use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, info};

use crate::modules::customer_records::core::change_request::ChangeRequest;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ChangeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    info!(id = %request.id, "Received request to process message");
    Json(state.dispatcher.process(request).await).into_response()
}

pub async fn handle_async(
    State(state): State<AppState>,
    body: Result<Json<ChangeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    info!(id = %request.id, "Received async request to process message");
    match state.dispatcher.process_async(request).await {
        Ok(result) => Json(result).into_response(),
        Err(join_error) => {
            error!(error = %join_error, "Async processing worker failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn health() -> &'static str {
    "Service is healthy"
}
