//! Sentence embeddings + similarity.
//!
//! - [`sbert`] provides the BERT-family sentence encoder (stub mode supported).
//! - [`Embedder`] is the seam the corpus index and classifier are built against.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// SBERT-style sentence encoder.
pub mod sbert;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::StaticEmbedder;
pub use sbert::{SBERT_EMBEDDING_DIM, SBERT_MAX_SEQ_LEN, SbertConfig, SbertEmbedder};

/// Maps text to fixed-length vectors. Implementations must be stable: the
/// same text always yields the same vector for a given model.
pub trait Embedder: Send + Sync {
    /// Generates an embedding for a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Generates embeddings for a batch of strings, index-aligned with the
    /// input.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Returns the output vector dimension.
    fn embedding_dim(&self) -> usize;
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` for mismatched lengths or zero-norm inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
