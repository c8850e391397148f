//! TokenLens Server - tokenization visualization over HTTP.
//!
//! Accepts text, runs it through every configured tokenization backend, and
//! returns colored token sequences for display. Backends that cannot reach
//! their primary tokenizer resource degrade to deterministic local fallback
//! segmentation instead of failing the request.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tokenlens_api::{ApiConfig, DynAppState};
use tokenlens_server::{config::load_backends, hf_auth, AppState, CliArgs};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tokenlens_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    info!("Starting TokenLens Server v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP port: {}", args.port);

    // Explicit startup step, never an import-time side effect.
    hf_auth::report_hub_auth();

    let backends = load_backends(&args)?;
    for backend in &backends {
        info!(id = %backend.id, name = %backend.name, enabled = backend.enabled, "backend configured");
    }

    let state = Arc::new(AppState::new(backends)) as DynAppState;

    let api_config = ApiConfig {
        port: args.port,
        enable_swagger: !args.no_swagger,
        ..Default::default()
    };

    tokenlens_api::run_server_with_config(state, api_config).await
}
