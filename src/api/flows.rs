//! Flow endpoints: chat, summarize, and voice

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use super::ApiState;
use crate::flows::{
    chat_completion, summarize_context, voice_chat_completion, ChatInput, ChatOutput,
    SummarizeInput, SummarizeOutput, VoiceInput, VoiceOutput,
};
use crate::Error;

/// Build flow router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/summarize", post(summarize))
        .route("/voice", post(voice))
        .with_state(state)
}

/// Text chat completion
async fn chat(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<ChatInput>,
) -> Result<Json<ChatOutput>, ApiError> {
    let output = chat_completion(&state.client, input).await?;
    Ok(Json(output))
}

/// Context summarization (text or image data URI)
async fn summarize(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<SummarizeInput>,
) -> Result<Json<SummarizeOutput>, ApiError> {
    let output = summarize_context(&state.client, input).await?;
    Ok(Json(output))
}

/// Voice chat completion, returning a playable WAV data URI
async fn voice(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<VoiceInput>,
) -> Result<Json<VoiceOutput>, ApiError> {
    let output = voice_chat_completion(&state.client, input).await?;
    Ok(Json(output))
}

/// Error wrapper mapping flow failures to JSON error responses
///
/// Every failure surfaces as a generic `{error: {code, message}}` body;
/// handlers never panic on a failed request.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: ErrorBody,
        }

        #[derive(Serialize)]
        struct ErrorBody {
            code: &'static str,
            message: String,
        }

        let (status, code) = match &self.0 {
            Error::Config(_) => (StatusCode::SERVICE_UNAVAILABLE, "not_configured"),
            Error::DataUri(_) | Error::Base64(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Error::Upstream { .. } | Error::EmptyResponse(_) => {
                (StatusCode::BAD_GATEWAY, "upstream_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        tracing::warn!(code, error = %self.0, "request failed");

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code,
                message: self.0.to_string(),
            },
        });

        (status, body).into_response()
    }
}
