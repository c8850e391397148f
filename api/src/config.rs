//! API configuration.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

/// Configuration for the HTTP API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port to bind the HTTP server to.
    ///
    /// Default: 8080
    pub port: u16,

    /// Enable Cross-Origin Resource Sharing (CORS).
    ///
    /// Default: true
    pub enable_cors: bool,

    /// Allowed origins for CORS requests.
    ///
    /// Use `["*"]` to allow all origins (development only).
    ///
    /// Default: `["*"]`
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI documentation at `/swagger-ui/`.
    ///
    /// Default: true
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            enable_swagger: true,
        }
    }
}

impl ApiConfig {
    /// CORS layer derived from this configuration: permissive when the
    /// wildcard origin is listed, restricted to the parseable origins
    /// otherwise, a no-op layer when CORS is disabled.
    pub(crate) fn cors_layer(&self) -> CorsLayer {
        if !self.enable_cors {
            return CorsLayer::new();
        }

        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origins.iter().any(|origin| origin == "*") {
            layer.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            layer.allow_origin(origins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_builds_for_every_origin_shape() {
        // Wildcard, explicit list, and disabled must all produce a layer.
        let _ = ApiConfig::default().cors_layer();

        let restricted = ApiConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..Default::default()
        };
        let _ = restricted.cors_layer();

        let disabled = ApiConfig {
            enable_cors: false,
            ..Default::default()
        };
        let _ = disabled.cors_layer();
    }
}
