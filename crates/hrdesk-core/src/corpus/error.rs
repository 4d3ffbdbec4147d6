use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read FAQ document at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed FAQ document at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corpus has no entries")]
    EmptyCorpus,

    #[error("failed to embed corpus: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("embedding count {embeddings} does not match entry count {entries}")]
    IndexMisaligned { entries: usize, embeddings: usize },
}
