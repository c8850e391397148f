//! Tokenizer dispatch and fallback engine for TokenLens.
//!
//! For each configured backend the engine attempts the backend's primary
//! tokenizer resource (a tiktoken reference encoding or a HuggingFace
//! `tokenizer.json`), classifies any failure, and substitutes a deterministic
//! local fallback segmentation so every backend always yields a non-empty,
//! well-formed token list.
//!
//! Components:
//! - [`segmenter`]: the parameterized fallback splitters
//! - [`encoder`]: the `encode(text) -> tokens` contract with real resources
//! - [`adapter`]: per-backend primary/fallback state machine
//! - [`engine`]: the backend-agnostic dispatcher
//! - [`color`]: the presentation annotator

pub mod adapter;
pub mod catalog;
pub mod color;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod segmenter;

pub use adapter::BackendAdapter;
pub use catalog::{default_catalog, BackendConfig, EncoderKind, FallbackKind};
pub use color::{colorize, random_color, random_color_with};
pub use encoder::{Encoder, HfFileEncoder, HfTokenizer, TiktokenEncoder};
pub use engine::{BackendOutput, Engine};
pub use error::{EncodeError, FailureClass, Result};
pub use segmenter::{segment, SegmentRules, SENTINEL, WORD_MARKER};
