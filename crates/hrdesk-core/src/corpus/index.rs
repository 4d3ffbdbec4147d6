use std::cmp::Ordering;

use tracing::{debug, info};

use super::FaqEntry;
use super::error::CorpusError;
use crate::embedding::{Embedder, cosine_similarity};

/// How a [`MatchCandidate`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMethod {
    Semantic,
    Fuzzy,
}

/// Transient result of a matching pass. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub entry_index: usize,
    pub score: f32,
    pub method: MatchMethod,
}

/// The FAQ set plus precomputed question embeddings, index-aligned 1:1.
///
/// Read-only after construction; rebuilt wholesale when the corpus changes.
pub struct CorpusIndex {
    entries: Vec<FaqEntry>,
    embeddings: Vec<Vec<f32>>,
}

impl std::fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl CorpusIndex {
    /// Precomputes one embedding per entry and builds the index.
    ///
    /// Fails with [`CorpusError::EmptyCorpus`] when `entries` is empty.
    pub fn build<E: Embedder + ?Sized>(
        entries: Vec<FaqEntry>,
        embedder: &E,
    ) -> Result<Self, CorpusError> {
        if entries.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let embeddings = embedder.embed_batch(&questions)?;

        if embeddings.len() != entries.len() {
            return Err(CorpusError::IndexMisaligned {
                entries: entries.len(),
                embeddings: embeddings.len(),
            });
        }

        info!(
            entries = entries.len(),
            embedding_dim = embedder.embedding_dim(),
            "Corpus index built"
        );

        Ok(Self {
            entries,
            embeddings,
        })
    }

    /// Returns up to `k` entries ordered by descending cosine similarity.
    ///
    /// Ties are broken by lowest entry index, so rankings are deterministic.
    pub fn nearest(&self, query_embedding: &[f32], k: usize) -> Vec<MatchCandidate> {
        let mut candidates: Vec<MatchCandidate> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(entry_index, embedding)| MatchCandidate {
                entry_index,
                score: cosine_similarity(query_embedding, embedding),
                method: MatchMethod::Semantic,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entry_index.cmp(&b.entry_index))
        });
        candidates.truncate(k);

        debug!(
            k = k,
            best_score = candidates.first().map(|c| c.score),
            "Semantic nearest-neighbor scan complete"
        );

        candidates
    }

    /// Returns the entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// All entries, in corpus order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// All questions, in corpus order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
