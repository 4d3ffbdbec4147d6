use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to embed query: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("corpus entry {index} out of bounds")]
    EntryOutOfBounds { index: usize },
}
