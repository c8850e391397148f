//! Request values accepted by the backend.

use serde::{Deserialize, Serialize};

use crate::error::ValueResult;

/// A request from any transport, tagged by action.
///
/// The transport layer validates shape (e.g. rejects empty text) before a
/// `RequestValue` is ever constructed; the backend can assume the payload is
/// well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RequestValue {
    /// Tokenize text with every configured backend.
    Tokenize {
        /// Raw input text. Never empty (enforced at the transport boundary).
        text: String,
    },
    /// List the configured backend catalog.
    ListBackends,
    /// Service health probe.
    Health,
}

impl RequestValue {
    /// Build a tokenize request.
    pub fn tokenize(text: impl Into<String>) -> Self {
        Self::Tokenize { text: text.into() }
    }

    /// Parse a request from its JSON wire form.
    pub fn from_json(json: &str) -> ValueResult<Self> {
        Ok(serde_json::from_str(json)?)
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
    fn tokenize_round_trips_through_json() {
        let req = RequestValue::tokenize("Hello, world!");
        let json = req.to_json().unwrap();
        assert_eq!(RequestValue::from_json(&json).unwrap(), req);
    }

    #[test]
    fn action_tag_is_snake_case() {
        let json = RequestValue::ListBackends.to_json().unwrap();
        assert!(json.contains("list_backends"));
    }
}
