//! Primary tokenizer resources behind the [`Encoder`] contract.
//!
//! This is the sole interface the engine has to any real tokenizer library:
//! `encode(text) -> token display strings`, or a classified failure. The
//! engine never depends on a model's internal vocabulary.

use std::path::Path;

pub use tokenizers::Tokenizer as HfTokenizer;

use crate::error::{EncodeError, Result};

/// External tokenizer resource contract.
pub trait Encoder: Send + Sync {
    /// Encode text into ordered token display strings.
    fn encode(&self, text: &str) -> Result<Vec<String>>;
}

/// OpenAI reference encodings via tiktoken (GPT-2 r50k, GPT-4 cl100k).
pub struct TiktokenEncoder {
    bpe: tiktoken_rs::CoreBPE,
    with_ids: bool,
}

impl TiktokenEncoder {
    /// GPT-2 style r50k_base encoding.
    pub fn r50k() -> Result<Self> {
        let bpe = tiktoken_rs::r50k_base()
            .map_err(|e| EncodeError::ResourceMissing(e.to_string()))?;
        Ok(Self {
            bpe,
            with_ids: false,
        })
    }

    /// GPT-4 style cl100k_base encoding.
    ///
    /// With `with_ids`, each token's numeric id is appended to its display
    /// text as `"<token> [<id>]"` -- display text is the transport for the
    /// id signal, not a separate structured field.
    pub fn cl100k(with_ids: bool) -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| EncodeError::ResourceMissing(e.to_string()))?;
        Ok(Self { bpe, with_ids })
    }
}

impl Encoder for TiktokenEncoder {
    fn encode(&self, text: &str) -> Result<Vec<String>> {
        let ids = self.bpe.encode_ordinary(text);
        let mut tokens = Vec::with_capacity(ids.len());
        for id in ids {
            // Single-token decodes can land mid-codepoint; substitute the
            // replacement char rather than dropping the token.
            let piece = self
                .bpe
                .decode(vec![id])
                .unwrap_or_else(|_| "\u{FFFD}".to_string());
            if self.with_ids {
                tokens.push(format!("{piece} [{id}]"));
            } else {
                tokens.push(piece);
            }
        }
        Ok(tokens)
    }
}

/// HuggingFace tokenizer loaded from a local `tokenizer.json`.
#[derive(Debug)]
pub struct HfFileEncoder {
    inner: HfTokenizer,
}

impl HfFileEncoder {
    /// Load a tokenizer file. A missing or unreadable file classifies as
    /// `ResourceMissing`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EncodeError::ResourceMissing(format!(
                "tokenizer file not found: {}",
                path.display()
            )));
        }
        let inner = HfTokenizer::from_file(path)
            .map_err(|e| EncodeError::ResourceMissing(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Encoder for HfFileEncoder {
    fn encode(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| EncodeError::InputRejected(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tokenizer_file_classifies_as_resource_missing() {
        let err = HfFileEncoder::from_file("no/such/tokenizer.json").unwrap_err();
        assert_eq!(
            err.class(),
            crate::error::FailureClass::ResourceMissing
        );
    }
}
