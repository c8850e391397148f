//! Backend catalog: configuration data describing each tokenization backend.
//!
//! The engine is backend-agnostic; everything that distinguishes one backend
//! from another -- identifier, display metadata, primary encoder, failure
//! policy, fallback segmenter -- lives here as data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FailureClass;
use crate::segmenter::SegmentRules;

/// Which primary encoder a backend wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncoderKind {
    /// GPT-2 style r50k_base reference encoding.
    TiktokenR50k,
    /// GPT-4 style cl100k_base reference encoding.
    TiktokenCl100k,
    /// cl100k_base with per-token numeric ids appended to display text.
    TiktokenCl100kIds,
    /// HuggingFace `tokenizer.json` loaded from `tokenizer_file`.
    HfFile,
}

/// Which fallback segmenter a backend routes recoverable failures to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackKind {
    /// Character-chunk splitter (BPE surrogate).
    CharChunk,
    /// Punctuation-aware splitter with word-start marker (SentencePiece
    /// surrogate).
    SentenceMarker,
    /// Generalized punctuation splitter (word-level surrogate).
    WordLevel,
}

impl FallbackKind {
    /// The rule set implementing this fallback family.
    pub fn rules(&self) -> &'static SegmentRules {
        match self {
            Self::CharChunk => &SegmentRules::CHAR_CHUNK,
            Self::SentenceMarker => &SegmentRules::SENTENCE_MARKER,
            Self::WordLevel => &SegmentRules::WORD_LEVEL,
        }
    }
}

/// Full configuration for one backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Stable identifier, used as the response map key.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// One-line description of the scheme.
    pub description: String,
    /// Primary encoder.
    pub kind: EncoderKind,
    /// Tokenizer file for `EncoderKind::HfFile` backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer_file: Option<PathBuf>,
    /// Failure classes routed to the fallback segmenter; anything else is
    /// terminal and yields a sentinel token.
    #[serde(default)]
    pub recoverable: Vec<FailureClass>,
    /// Fallback segmenter for recoverable failures.
    pub fallback: FallbackKind,
    /// Disabled backends short-circuit to a terminal sentinel without
    /// attempting anything.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

const ALL_CLASSES: [FailureClass; 4] = [
    FailureClass::ResourceUnavailable,
    FailureClass::ResourceMissing,
    FailureClass::UnsupportedRuntime,
    FailureClass::InputRejected,
];

const OFFLINE_CLASSES: [FailureClass; 2] = [
    FailureClass::ResourceUnavailable,
    FailureClass::ResourceMissing,
];

/// The built-in backend catalog, used when no configuration file overrides it.
///
/// `tokenizer_dir`, when given, is where `HfFile` backends look for their
/// `tokenizer.json` files.
pub fn default_catalog(tokenizer_dir: Option<&std::path::Path>) -> Vec<BackendConfig> {
    let hf_file = |name: &str| tokenizer_dir.map(|dir| dir.join(name));

    vec![
        BackendConfig {
            id: "gpt2".to_string(),
            name: "GPT-2".to_string(),
            description: "Byte-pair encoding via the r50k_base reference encoding".to_string(),
            kind: EncoderKind::TiktokenR50k,
            tokenizer_file: None,
            recoverable: ALL_CLASSES.to_vec(),
            fallback: FallbackKind::CharChunk,
            enabled: true,
        },
        BackendConfig {
            id: "gpt4".to_string(),
            name: "GPT-4".to_string(),
            description: "Byte-pair encoding via the cl100k_base reference encoding".to_string(),
            kind: EncoderKind::TiktokenCl100k,
            tokenizer_file: None,
            recoverable: ALL_CLASSES.to_vec(),
            fallback: FallbackKind::CharChunk,
            enabled: true,
        },
        BackendConfig {
            id: "sentencepiece".to_string(),
            name: "T5".to_string(),
            description: "SentencePiece-style subword tokenization".to_string(),
            kind: EncoderKind::HfFile,
            tokenizer_file: hf_file("t5/tokenizer.json"),
            recoverable: OFFLINE_CLASSES.to_vec(),
            fallback: FallbackKind::SentenceMarker,
            enabled: true,
        },
        BackendConfig {
            id: "wordpiece".to_string(),
            name: "BERT".to_string(),
            description: "WordPiece subword tokenization".to_string(),
            kind: EncoderKind::HfFile,
            tokenizer_file: hf_file("bert/tokenizer.json"),
            recoverable: OFFLINE_CLASSES.to_vec(),
            fallback: FallbackKind::WordLevel,
            enabled: true,
        },
        BackendConfig {
            id: "byte-pair-ids".to_string(),
            name: "Byte-pair with ids".to_string(),
            description: "cl100k_base tokens with numeric ids in the display text".to_string(),
            kind: EncoderKind::TiktokenCl100kIds,
            tokenizer_file: None,
            // No surrogate can produce real ids, so every failure is terminal.
            recoverable: Vec::new(),
            fallback: FallbackKind::CharChunk,
            enabled: true,
        },
    ]
}
