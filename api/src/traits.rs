//! Backend trait consumed by the API layer.

use std::sync::Arc;

use async_trait::async_trait;
use tokenlens_values::{RequestValue, ResponseValue};

/// Unified backend trait every transport calls into.
///
/// The implementation does not know or care where a request came from; all
/// transports use the same [`RequestValue`], ensuring identical behavior
/// regardless of how the request arrived.
#[async_trait]
pub trait AppStateProvider: Send + Sync + 'static {
    /// Handle an incoming request from any transport.
    async fn handle_request(&self, request: RequestValue) -> anyhow::Result<ResponseValue>;
}

/// Concrete state type used by the Axum router.
pub type DynAppState = Arc<dyn AppStateProvider>;
