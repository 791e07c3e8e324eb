//! Chat completions endpoint
//!
//! OpenAI-compatible chat completions API endpoint. Validates the request,
//! forwards it to the configured provider and relays the reply unchanged.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{error, info};

use crate::{
    error::{AppError, AppResult},
    types::{ChatCompletionRequest, ChatCompletionResponse},
    AppState,
};

/// Handle chat completion requests
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> AppResult<Response> {
    let start_time = Instant::now();

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|_| AppError::BadRequest("Failed to read request body".to_string()))?;

    let chat_request = parse_request(&body)?;

    info!(
        model = %chat_request.model,
        messages = chat_request.messages.len(),
        provider = state.provider.name(),
        upstream = %state.config.openai_api_url,
        "Processing chat completion request"
    );

    let response = state
        .provider
        .create_chat_completion(&chat_request)
        .await
        .map_err(|e| {
            error!(model = %chat_request.model, error = %e, "OpenAI API error");
            AppError::from(e)
        })?;

    let response = encode_response(&response)?;

    info!(
        model = %chat_request.model,
        duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
        "Chat completion request completed"
    );

    Ok(response)
}

/// Any method other than POST on the completions route
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Decode and validate an inbound request body
fn parse_request(body: &Bytes) -> AppResult<ChatCompletionRequest> {
    let request: ChatCompletionRequest = serde_json::from_slice(body)
        .map_err(|_| AppError::BadRequest("Invalid JSON in request body".to_string()))?;

    request.validate()?;
    Ok(request)
}

/// Serialize the provider response as the JSON reply body
fn encode_response(response: &ChatCompletionResponse) -> AppResult<Response> {
    let body = serde_json::to_vec(response).map_err(|e| {
        error!(error = %e, "Failed to encode response");
        AppError::Encoding(e)
    })?;

    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
