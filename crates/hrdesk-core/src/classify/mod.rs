//! Advisory topic classification against per-category exemplar questions.
//!
//! Categories are held in insertion order, and that order is the tie-break:
//! when two categories share the exact maximum similarity, the first-seen
//! category wins. The classifier never gates the answer pipeline.

mod error;


pub use error::ClassifyError;

use tracing::debug;

use crate::constants::CATEGORY_CONFIDENCE_FLOOR;
use crate::embedding::{Embedder, cosine_similarity};

/// Default HR topic exemplars, in classification priority order.
pub const DEFAULT_CATEGORY_EXEMPLARS: &[(&str, &[&str])] = &[
    (
        "leave",
        &[
            "What is the leave policy?",
            "How many leaves do I have left?",
            "Can I carry forward my unused leaves?",
        ],
    ),
    (
        "payroll",
        &[
            "When will I get my salary?",
            "How do I check my salary slip?",
            "How do I update my bank account details for salary credit?",
        ],
    ),
    (
        "remote work",
        &[
            "What is the work-from-home policy?",
            "Can I work remotely permanently?",
        ],
    ),
    (
        "performance",
        &[
            "What are the promotion criteria?",
            "How do I enroll in company-sponsored training programs?",
        ],
    ),
    (
        "policies",
        &[
            "What is the dress code policy?",
            "How do I report workplace harassment?",
            "How do I resign from the company?",
        ],
    ),
];

struct CategoryExemplars {
    label: String,
    embeddings: Vec<Vec<f32>>,
}

/// Maps a query embedding to a fixed topic label, or nothing when no label
/// clears the confidence floor. Static after construction.
pub struct CategoryClassifier {
    categories: Vec<CategoryExemplars>,
}

impl std::fmt::Debug for CategoryClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryClassifier")
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl CategoryClassifier {
    /// Precomputes exemplar embeddings for each category, preserving the
    /// order of `definitions`.
    pub fn build<E: Embedder + ?Sized>(
        definitions: &[(&str, &[&str])],
        embedder: &E,
    ) -> Result<Self, ClassifyError> {
        if definitions.is_empty() {
            return Err(ClassifyError::NoCategories);
        }

        let mut categories = Vec::with_capacity(definitions.len());
        for (label, questions) in definitions {
            if questions.is_empty() {
                return Err(ClassifyError::EmptyCategory {
                    label: label.to_string(),
                });
            }

            let embeddings = embedder.embed_batch(questions)?;
            categories.push(CategoryExemplars {
                label: label.to_string(),
                embeddings,
            });
        }

        debug!(categories = categories.len(), "Category classifier built");

        Ok(Self { categories })
    }

    /// Builds the classifier with [`DEFAULT_CATEGORY_EXEMPLARS`].
    pub fn with_defaults<E: Embedder + ?Sized>(embedder: &E) -> Result<Self, ClassifyError> {
        Self::build(DEFAULT_CATEGORY_EXEMPLARS, embedder)
    }

    /// Returns the label whose exemplars best match the query embedding,
    /// if its score is strictly above [`CATEGORY_CONFIDENCE_FLOOR`].
    pub fn classify(&self, query_embedding: &[f32]) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;

        for category in &self.categories {
            let max_score = category
                .embeddings
                .iter()
                .map(|e| cosine_similarity(query_embedding, e))
                .fold(f32::NEG_INFINITY, f32::max);

            // Strictly greater, so the first-seen category wins exact ties.
            if best.is_none_or(|(_, score)| max_score > score) {
                best = Some((category.label.as_str(), max_score));
            }
        }

        let (label, score) = best?;
        debug!(label = label, score = score, "Best category candidate");

        (score > CATEGORY_CONFIDENCE_FLOOR).then_some(label)
    }

    /// Category labels in classification priority order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.label.as_str())
    }
}
