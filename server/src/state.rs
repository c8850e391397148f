//! Application state: the engine plus the backend catalog.

use async_trait::async_trait;

use tokenlens_api::AppStateProvider;
use tokenlens_tokenization::{random_color, BackendConfig, Engine};
use tokenlens_values::{
    BackendInfo, BackendResult, ColoredToken, RequestValue, ResponseValue, TokenizeResponse,
};

/// Backend state shared by every transport.
///
/// Built once at startup; the engine's loaded tokenizer resources are
/// read-only afterwards, so the state is freely shareable across concurrent
/// requests with no locking.
pub struct AppState {
    engine: Engine,
}

impl AppState {
    /// Build the state from the resolved backend catalog.
    pub fn new(configs: Vec<BackendConfig>) -> Self {
        Self {
            engine: Engine::from_configs(configs),
        }
    }

    /// Build the state around a pre-wired engine (tests, custom setups).
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    fn tokenize(&self, text: &str) -> TokenizeResponse {
        let mut results = TokenizeResponse::new();
        for output in self.engine.tokenize_all(text) {
            let tokens = output
                .tokens
                .into_iter()
                .map(|text| ColoredToken {
                    text,
                    color: random_color(),
                })
                .collect();
            results.insert(
                output.id,
                BackendResult::new(output.name, output.description, tokens),
            );
        }
        results
    }

    fn backends(&self) -> Vec<BackendInfo> {
        self.engine
            .backends()
            .map(|adapter| BackendInfo {
                id: adapter.id().to_string(),
                name: adapter.name().to_string(),
                description: adapter.description().to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl AppStateProvider for AppState {
    async fn handle_request(&self, request: RequestValue) -> anyhow::Result<ResponseValue> {
        match request {
            RequestValue::Tokenize { text } => Ok(ResponseValue::Tokenize(self.tokenize(&text))),
            RequestValue::ListBackends => Ok(ResponseValue::Backends(self.backends())),
            RequestValue::Health => Ok(ResponseValue::health(
                "tokenlens-server",
                env!("CARGO_PKG_VERSION"),
            )),
        }
    }
}
