//! Tokenization endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tokenlens_values::{RequestValue, ResponseValue, TokenizeResponse};

use crate::error::{ApiError, ApiResult};
use crate::traits::DynAppState;

/// Tokenization request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenizeRequest {
    /// Raw text to tokenize. Must be non-empty.
    #[serde(default)]
    pub text: String,
}

/// Tokenize text with every configured backend.
///
/// Empty or missing text is rejected at this boundary with a 400; the core
/// engine is never invoked for it. Per-backend failures do NOT produce an
/// HTTP error -- they surface as sentinel tokens inside the response so a
/// single unavailable backend degrades gracefully.
#[utoipa::path(
    post,
    path = "/tokenize",
    request_body = TokenizeRequest,
    responses(
        (status = 200, description = "Per-backend tokens with display colors", body = TokenizeResponse),
        (status = 400, description = "No text provided"),
    ),
    tag = "Tokenization"
)]
pub async fn tokenize(
    State(state): State<DynAppState>,
    Json(payload): Json<TokenizeRequest>,
) -> ApiResult<Json<TokenizeResponse>> {
    let request_id = uuid::Uuid::new_v4();

    if payload.text.is_empty() {
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        text_len = payload.text.len(),
        "tokenize request received"
    );

    let response = state
        .handle_request(RequestValue::tokenize(payload.text))
        .await
        .map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "tokenize request failed");
            ApiError::from(e)
        })?;

    match response {
        ResponseValue::Tokenize(results) => {
            tracing::info!(
                request_id = %request_id,
                backends = results.results.len(),
                "tokenize request complete"
            );
            Ok(Json(results))
        }
        other => Err(ApiError::Internal(format!(
            "unexpected backend response to tokenize: {other:?}"
        ))),
    }
}
