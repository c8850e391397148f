//! API route handlers.

pub mod backends;
pub mod health;
pub mod tokenize;

use utoipa::OpenApi;

/// OpenAPI documentation for all routes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TokenLens API",
        version = "1.0.0",
        description = "Tokenization visualization service: text in, colored tokens per backend out",
        license(name = "MIT")
    ),
    paths(
        health::health,
        tokenize::tokenize,
        backends::list_backends,
    ),
    components(schemas(
        tokenize::TokenizeRequest,
        tokenlens_values::TokenizeResponse,
        tokenlens_values::BackendResult,
        tokenlens_values::ColoredToken,
        tokenlens_values::BackendInfo,
        tokenlens_values::HealthStatus,
    ))
)]
pub struct ApiDoc;
