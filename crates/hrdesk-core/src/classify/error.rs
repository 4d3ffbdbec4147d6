use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no categories defined")]
    NoCategories,

    #[error("category '{label}' has no exemplar questions")]
    EmptyCategory { label: String },

    #[error("failed to embed exemplars: {0}")]
    Embedding(#[from] EmbeddingError),
}
