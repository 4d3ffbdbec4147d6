//! hrdesk library crate (used by the server and integration tests).
//!
//! Answers free-text employee questions against a curated HR FAQ corpus,
//! falling back to a generative completion service when no confident match
//! exists.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Host configuration
//! - [`FaqEntry`], [`CorpusIndex`] - FAQ corpus and its embedding index
//! - [`ResolutionEngine`], [`Resolution`], [`ResolveStatus`] - Answer resolution
//!
//! ## Matching & Classification
//! - [`LexicalMatcher`], [`token_set_ratio`] - Token-set fuzzy scoring
//! - [`CategoryClassifier`] - Advisory topic classification
//! - [`SbertEmbedder`], [`SbertConfig`], [`Embedder`] - Sentence embeddings
//!
//! ## Session & Fallback
//! - [`SessionStore`], [`PendingSuggestion`] - Per-session confirmation memory
//! - [`CompletionBackend`], [`GenAiCompleter`] - Generative fallback seam
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod classify;
pub mod completion;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod matching;
pub mod resolve;
pub mod session;

pub use classify::{CategoryClassifier, ClassifyError, DEFAULT_CATEGORY_EXEMPLARS};
pub use completion::{CompletionBackend, CompletionConfig, CompletionError, GenAiCompleter};
#[cfg(any(test, feature = "mock"))]
pub use completion::MockCompleter;
pub use config::{Config, ConfigError};
pub use corpus::{
    CorpusError, CorpusIndex, FaqDocument, FaqEntry, MatchCandidate, MatchMethod, load_document,
};
pub use embedding::{
    Embedder, EmbeddingError, SBERT_EMBEDDING_DIM, SBERT_MAX_SEQ_LEN, SbertConfig, SbertEmbedder,
    cosine_similarity,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::StaticEmbedder;
pub use matching::{LexicalMatcher, token_set_ratio};
pub use resolve::{
    HRDESK_STATUS_HEADER, Resolution, ResolutionEngine, ResolveError, ResolveStatus,
};
pub use session::{PendingSuggestion, SessionStore, is_affirmative};
