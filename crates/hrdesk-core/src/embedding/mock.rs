//! Mock embedder for tests: returns preset vectors by exact text.

use std::collections::HashMap;

use super::{Embedder, EmbeddingError};

/// Embedder backed by a fixed text → vector table.
///
/// Texts without a preset vector embed to all-zeros, which scores 0.0
/// against everything.
#[derive(Debug, Clone, Default)]
pub struct StaticEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl StaticEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            dim,
        }
    }

    /// Presets the vector returned for `text`.
    pub fn insert(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "vector dimension mismatch");
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl Embedder for StaticEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dim]))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
