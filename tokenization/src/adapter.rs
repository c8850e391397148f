//! Backend adapters: primary-or-fallback tokenization per backend.
//!
//! Every adapter follows the same state machine: attempt the primary encoder,
//! classify any failure, then either route to the configured fallback
//! segmenter (recoverable) or emit a single descriptive sentinel token
//! (terminal). An adapter never returns an error and never returns an empty
//! token list.

use std::sync::Arc;

use crate::catalog::{BackendConfig, EncoderKind};
use crate::encoder::{Encoder, HfFileEncoder, TiktokenEncoder};
use crate::error::{EncodeError, Result};
use crate::segmenter::{segment, SENTINEL};

/// Outcome of resolving a backend's primary resource at construction.
enum Primary {
    /// Backend disabled in configuration; no primary, no fallback.
    Disabled,
    /// Resource loaded; shared read-only across requests.
    Ready(Arc<dyn Encoder>),
    /// Resource failed to load; the classified error is replayed per request
    /// so the normal recoverability policy applies.
    Failed(EncodeError),
}

/// One named tokenization backend.
pub struct BackendAdapter {
    config: BackendConfig,
    primary: Primary,
}

impl BackendAdapter {
    /// Build an adapter, resolving its primary resource once. Load failures
    /// are captured, not propagated; they surface per request as fallback or
    /// sentinel output.
    pub fn new(config: BackendConfig) -> Self {
        let primary = if !config.enabled {
            Primary::Disabled
        } else {
            match build_encoder(&config) {
                Ok(encoder) => Primary::Ready(encoder),
                Err(err) => {
                    tracing::warn!(
                        backend = %config.id,
                        class = ?err.class(),
                        error = %err,
                        "primary tokenizer unavailable, failure policy will apply"
                    );
                    Primary::Failed(err)
                }
            }
        };
        Self { config, primary }
    }

    /// Build an adapter around an explicit encoder resolution. Lets tests
    /// simulate unavailable or failing resources.
    pub fn with_encoder(config: BackendConfig, encoder: Result<Arc<dyn Encoder>>) -> Self {
        let primary = if !config.enabled {
            Primary::Disabled
        } else {
            match encoder {
                Ok(encoder) => Primary::Ready(encoder),
                Err(err) => Primary::Failed(err),
            }
        };
        Self { config, primary }
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn description(&self) -> &str {
        &self.config.description
    }

    /// Tokenize `text`. Infallible by design: failures degrade to fallback
    /// segmentation or sentinel tokens, never to an error.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let attempt = match &self.primary {
            Primary::Disabled => {
                return vec![format!("[{} not available]", self.config.name)];
            }
            Primary::Ready(encoder) => encoder.encode(text),
            Primary::Failed(err) => Err(err.clone()),
        };

        match attempt {
            Ok(tokens) if !tokens.is_empty() => tokens,
            Ok(_) => vec![SENTINEL.to_string()],
            Err(err) => {
                let class = err.class();
                if self.config.recoverable.contains(&class) {
                    tracing::debug!(
                        backend = %self.config.id,
                        class = ?class,
                        "routing to fallback segmenter"
                    );
                    segment(text, self.config.fallback.rules())
                } else {
                    vec![format!(
                        "[{} tokenization failed: {}]",
                        self.config.name,
                        class.label()
                    )]
                }
            }
        }
    }
}

fn build_encoder(config: &BackendConfig) -> Result<Arc<dyn Encoder>> {
    match config.kind {
        EncoderKind::TiktokenR50k => Ok(Arc::new(TiktokenEncoder::r50k()?)),
        EncoderKind::TiktokenCl100k => Ok(Arc::new(TiktokenEncoder::cl100k(false)?)),
        EncoderKind::TiktokenCl100kIds => Ok(Arc::new(TiktokenEncoder::cl100k(true)?)),
        EncoderKind::HfFile => {
            let path = config.tokenizer_file.as_ref().ok_or_else(|| {
                EncodeError::ResourceMissing(format!(
                    "no tokenizer file configured for backend '{}'",
                    config.id
                ))
            })?;
            Ok(Arc::new(HfFileEncoder::from_file(path)?))
        }
    }
}
