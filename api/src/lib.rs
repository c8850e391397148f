//! TokenLens API Crate
//!
//! Self-contained HTTP API layer using Axum for the TokenLens service.
//!
//! The API layer owns the request boundary: it validates shape (rejecting
//! empty text before the core is ever invoked), translates HTTP payloads to
//! [`tokenlens_values::RequestValue`], and renders backend failures as RFC
//! 7807 problem details. Everything behind the boundary speaks through the
//! [`AppStateProvider`] trait, so the same backend serves any transport.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod router;
mod routes;
mod traits;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use traits::{AppStateProvider, DynAppState};

use std::net::SocketAddr;
use std::sync::Arc;

/// Run the HTTP API server with default configuration on `port`.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server encounters a
/// fatal error.
pub async fn run_server<S>(state: S, port: u16) -> anyhow::Result<()>
where
    S: AppStateProvider + 'static,
{
    let config = ApiConfig {
        port,
        ..Default::default()
    };
    run_server_with_config(Arc::new(state) as DynAppState, config).await
}

/// Run the HTTP API server with custom configuration.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server_with_config(state: DynAppState, config: ApiConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("TokenLens API server listening on http://{}", addr);
    if config.enable_swagger {
        tracing::info!("Swagger UI:   http://{}/swagger-ui/", addr);
        tracing::info!("OpenAPI spec: http://{}/api-doc/openapi.json", addr);
    }

    let app = router::configure_routes(state, &config);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build a router without binding a listener, for integration tests.
pub fn build_test_router(state: DynAppState) -> axum::Router {
    router::configure_routes(state, &ApiConfig::default())
}
