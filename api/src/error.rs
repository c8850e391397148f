//! Error types for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types following RFC 7807 Problem Details.
///
/// Note that per-backend tokenization failures never surface here: they
/// degrade to sentinel tokens inside the response data. The only client
/// error this service produces on the tokenize path is the boundary-level
/// empty-text rejection.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - malformed request
    BadRequest(String),

    /// Not found (404) - resource doesn't exist
    NotFound(String),

    /// Internal server error (500)
    Internal(String),

    /// Service unavailable (503) - temporary failure
    ServiceUnavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Self::Internal(msg) => write!(f, "Internal Error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// RFC 7807 Problem Details response.
#[derive(Debug, Serialize, Deserialize)]
struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    type_uri: String,

    /// Short, human-readable summary
    title: String,

    /// HTTP status code
    status: u16,

    /// Human-readable explanation
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", msg)
            }
        };

        let problem = ProblemDetails {
            type_uri: format!(
                "https://tokenlens.dev/errors/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
        };

        (status, Json(problem)).into_response()
    }
}

/// Convert `anyhow::Error` from the backend to `ApiError`.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        let err_str = err.to_string();

        if err_str.contains("not found") || err_str.contains("Not Found") {
            ApiError::NotFound(err_str)
        } else if err_str.contains("unavailable") || err_str.contains("Unavailable") {
            ApiError::ServiceUnavailable(err_str)
        } else if err_str.contains("invalid") || err_str.contains("Invalid") {
            ApiError::BadRequest(err_str)
        } else {
            ApiError::Internal(err_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("No text provided".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn anyhow_conversion_classifies_by_message() {
        let err = anyhow::anyhow!("backend not found");
        assert!(matches!(ApiError::from(err), ApiError::NotFound(_)));

        let err = anyhow::anyhow!("something exploded");
        assert!(matches!(ApiError::from(err), ApiError::Internal(_)));
    }
}
