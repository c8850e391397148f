//! Configuration system for the TokenLens server.
//!
//! Sources, highest priority first:
//! - CLI arguments
//! - Environment variables
//! - TOML backends file
//! - Built-in defaults

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use tokenlens_tokenization::{default_catalog, BackendConfig};

/// Command-line arguments for the TokenLens server.
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenlens-server")]
#[command(about = "TokenLens Server - tokenization visualization over HTTP")]
#[command(version)]
pub struct CliArgs {
    /// HTTP port for the API server
    #[arg(long, short = 'p', default_value = "8080", env = "TOKENLENS_PORT")]
    pub port: u16,

    /// Backends configuration file path
    #[arg(long, short = 'c', default_value = "backends.toml", env = "TOKENLENS_CONFIG")]
    pub config: PathBuf,

    /// Directory holding HuggingFace tokenizer.json files for file-backed
    /// backends
    #[arg(long, env = "TOKENLENS_TOKENIZER_DIR")]
    pub tokenizer_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Disable the Swagger UI
    #[arg(long, default_value = "false", env = "TOKENLENS_NO_SWAGGER")]
    pub no_swagger: bool,
}

/// Backend catalog as loaded from the TOML configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendsFile {
    /// Configured backends, in display order.
    #[serde(rename = "backend")]
    pub backends: Vec<BackendConfig>,
}

/// Resolve the backend catalog: the TOML file when present, the built-in
/// defaults otherwise. The catalog is configuration data; the engine never
/// hardcodes backend identity.
pub fn load_backends(args: &CliArgs) -> Result<Vec<BackendConfig>> {
    if args.config.exists() {
        let raw = std::fs::read_to_string(&args.config)
            .with_context(|| format!("failed to read {}", args.config.display()))?;
        let file: BackendsFile = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", args.config.display()))?;
        if file.backends.is_empty() {
            anyhow::bail!("{} configures no backends", args.config.display());
        }
        tracing::info!(
            path = %args.config.display(),
            count = file.backends.len(),
            "loaded backend catalog from file"
        );
        Ok(file.backends)
    } else {
        tracing::info!("no backends file found, using built-in catalog");
        Ok(default_catalog(args.tokenizer_dir.as_deref()))
    }
}
