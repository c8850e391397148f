//! Health check endpoint.

use axum::{extract::State, Json};
use tokenlens_values::{HealthStatus, RequestValue, ResponseValue};

use crate::error::{ApiError, ApiResult};
use crate::traits::DynAppState;

/// Health check endpoint for service monitoring and load balancer probes.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
    ),
    tag = "System"
)]
pub async fn health(State(state): State<DynAppState>) -> ApiResult<Json<HealthStatus>> {
    let response = state
        .handle_request(RequestValue::Health)
        .await
        .map_err(ApiError::from)?;

    match response {
        ResponseValue::Health(status) => Ok(Json(status)),
        other => Err(ApiError::Internal(format!(
            "unexpected backend response to health probe: {other:?}"
        ))),
    }
}
