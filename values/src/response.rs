//! Response values produced by the backend.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValueResult;

/// A single display token with its presentation color.
///
/// Colors are freshly generated per response and carry no identity across
/// requests; two calls with the same text yield different colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColoredToken {
    /// Token display text (an owned copy, or a sentinel diagnostic string).
    pub text: String,
    /// CSS color string, e.g. `rgb(201, 177, 255)`.
    pub color: String,
}

/// One backend's tokenization of the input.
///
/// Constructed once per request per backend and immutable afterwards.
/// `tokens` is never empty: a backend that cannot tokenize at all still
/// contributes a single sentinel token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BackendResult {
    /// Human-readable backend display name.
    pub name: String,
    /// One-line description of the tokenization scheme.
    pub description: String,
    /// Ordered tokens with display colors.
    pub tokens: Vec<ColoredToken>,
    /// Token count; always equals `tokens.len()`.
    pub count: usize,
}

impl BackendResult {
    /// Build a result, deriving `count` from the token list.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tokens: Vec<ColoredToken>,
    ) -> Self {
        let count = tokens.len();
        Self {
            name: name.into(),
            description: description.into(),
            tokens,
            count,
        }
    }
}

/// Aggregate tokenization response: backend identifier mapped to its result,
/// in configured backend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TokenizeResponse {
    /// Backend id -> result. Insertion order equals configured order.
    #[schema(value_type = Object)]
    pub results: IndexMap<String, BackendResult>,
}

impl TokenizeResponse {
    /// Empty response, ready for in-order insertion.
    pub fn new() -> Self {
        Self {
            results: IndexMap::new(),
        }
    }

    /// Append one backend's result, preserving insertion order.
    pub fn insert(&mut self, id: impl Into<String>, result: BackendResult) {
        self.results.insert(id.into(), result);
    }
}

impl Default for TokenizeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Static metadata about one configured backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BackendInfo {
    /// Stable backend identifier used as the response map key.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// One-line description of the tokenization scheme.
    pub description: String,
}

/// Service health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Service status, `"ok"` when healthy.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// A response from the backend, mirroring [`crate::RequestValue`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseValue {
    /// Tokenization results for every configured backend.
    Tokenize(TokenizeResponse),
    /// Configured backend catalog.
    Backends(Vec<BackendInfo>),
    /// Health report.
    Health(HealthStatus),
}

impl ResponseValue {
    /// Build a health response for the given service name.
    pub fn health(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self::Health(HealthStatus {
            status: "ok".to_string(),
            service: service.into(),
            version: version.into(),
        })
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> ValueResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tracks_token_list() {
        let tokens = vec![
            ColoredToken {
                text: "Hello".to_string(),
                color: "rgb(200, 200, 200)".to_string(),
            },
            ColoredToken {
                text: "!".to_string(),
                color: "rgb(150, 255, 150)".to_string(),
            },
        ];
        let result = BackendResult::new("GPT-2", "BPE", tokens);
        assert_eq!(result.count, 2);
        assert_eq!(result.count, result.tokens.len());
    }

    #[test]
    fn response_preserves_insertion_order() {
        let mut resp = TokenizeResponse::new();
        resp.insert("gpt2", BackendResult::new("GPT-2", "BPE", vec![]));
        resp.insert("t5", BackendResult::new("T5", "SentencePiece", vec![]));
        resp.insert("whisper", BackendResult::new("Whisper", "Word", vec![]));
        let ids: Vec<&str> = resp.results.keys().map(String::as_str).collect();
        assert_eq!(ids, ["gpt2", "t5", "whisper"]);
    }

    #[test]
    fn tokenize_response_serializes_as_plain_map() {
        let mut resp = TokenizeResponse::new();
        resp.insert("gpt2", BackendResult::new("GPT-2", "BPE", vec![]));
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("gpt2").is_some(), "expected top-level backend key");
    }
}
