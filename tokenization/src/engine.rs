//! Dispatcher: runs every configured backend over the input independently.

use crate::adapter::BackendAdapter;
use crate::catalog::BackendConfig;

/// One backend's output, paired with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Never empty; sentinel tokens stand in when a backend cannot proceed.
    pub tokens: Vec<String>,
}

/// The tokenizer dispatch engine.
///
/// Holds one adapter per configured backend. Adapters are resolved once at
/// construction; their loaded resources are read-only afterwards, so the
/// engine is freely shareable across requests.
pub struct Engine {
    adapters: Vec<BackendAdapter>,
}

impl Engine {
    /// Build the engine from backend configuration, preserving order.
    pub fn from_configs(configs: Vec<BackendConfig>) -> Self {
        Self {
            adapters: configs.into_iter().map(BackendAdapter::new).collect(),
        }
    }

    /// Build the engine from pre-constructed adapters (tests, custom wiring).
    pub fn with_adapters(adapters: Vec<BackendAdapter>) -> Self {
        Self { adapters }
    }

    /// The configured backends, in order.
    pub fn backends(&self) -> impl Iterator<Item = &BackendAdapter> {
        self.adapters.iter()
    }

    /// Tokenize `text` with every backend, in configured order.
    ///
    /// Each adapter is invoked exactly once and independently: one backend's
    /// failure never aborts or affects another's result. The dispatcher does
    /// not inspect token contents.
    pub fn tokenize_all(&self, text: &str) -> Vec<BackendOutput> {
        self.adapters
            .iter()
            .map(|adapter| BackendOutput {
                id: adapter.id().to_string(),
                name: adapter.name().to_string(),
                description: adapter.description().to_string(),
                tokens: adapter.tokenize(text),
            })
            .collect()
    }
}
