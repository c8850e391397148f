//! Router configuration and setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::ApiConfig, routes, traits::DynAppState};

/// Configure routes and middleware.
///
/// Middleware layers are applied before `.with_state()` so the final router
/// is stateless and ready to serve.
pub fn configure_routes(state: DynAppState, config: &ApiConfig) -> Router {
    let router = Router::new()
        .route("/health", get(routes::health::health))
        .route("/tokenize", post(routes::tokenize::tokenize))
        .route("/v1/backends", get(routes::backends::list_backends))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(false))
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CompressionLayer::new())
        .layer(config.cors_layer())
        .with_state(state);

    if config.enable_swagger {
        router.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-doc/openapi.json", routes::ApiDoc::openapi()),
        )
    } else {
        router
    }
}
