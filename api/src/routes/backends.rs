//! Backend catalog endpoint.

use axum::{extract::State, Json};
use tokenlens_values::{BackendInfo, RequestValue, ResponseValue};

use crate::error::{ApiError, ApiResult};
use crate::traits::DynAppState;

/// List the configured tokenization backends.
#[utoipa::path(
    get,
    path = "/v1/backends",
    responses(
        (status = 200, description = "Configured backend catalog", body = [BackendInfo]),
    ),
    tag = "Tokenization"
)]
pub async fn list_backends(State(state): State<DynAppState>) -> ApiResult<Json<Vec<BackendInfo>>> {
    let response = state
        .handle_request(RequestValue::ListBackends)
        .await
        .map_err(ApiError::from)?;

    match response {
        ResponseValue::Backends(backends) => Ok(Json(backends)),
        other => Err(ApiError::Internal(format!(
            "unexpected backend response to backend listing: {other:?}"
        ))),
    }
}
