use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

/// A classified failure from a backend's primary tokenizer resource.
///
/// Every variant is caught and classified inside the owning adapter; none of
/// them ever reaches the dispatcher or the request boundary.
#[derive(Error, Debug, Clone)]
pub enum EncodeError {
    /// Network or remote resource unreachable.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Model or vocabulary file not present locally.
    #[error("Model not available offline: {0}")]
    ResourceMissing(String),

    /// Required library or feature absent in this build.
    #[error("Tokenizer runtime not available: {0}")]
    UnsupportedRuntime(String),

    /// The resource rejected the input text.
    #[error("Input rejected by tokenizer: {0}")]
    InputRejected(String),
}

impl EncodeError {
    /// The failure class used for recoverability policy decisions.
    pub fn class(&self) -> FailureClass {
        match self {
            Self::ResourceUnavailable(_) => FailureClass::ResourceUnavailable,
            Self::ResourceMissing(_) => FailureClass::ResourceMissing,
            Self::UnsupportedRuntime(_) => FailureClass::UnsupportedRuntime,
            Self::InputRejected(_) => FailureClass::InputRejected,
        }
    }
}

/// Field-less failure taxonomy, used by adapters to declare which failures
/// are recoverable (routed to a fallback segmenter) versus terminal (sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    ResourceUnavailable,
    ResourceMissing,
    UnsupportedRuntime,
    InputRejected,
}

impl FailureClass {
    /// Short human-readable label used in sentinel token text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable => "Resource unreachable",
            Self::ResourceMissing => "Model not available offline",
            Self::UnsupportedRuntime => "Tokenizer library not available",
            Self::InputRejected => "Input rejected by tokenizer",
        }
    }
}
