//! FAQ corpus: document loading and the embedding index.
//!
//! The corpus is loaded once at startup and is immutable afterwards;
//! embeddings are recomputed wholesale on every load.

mod error;
mod index;


pub use error::CorpusError;
pub use index::{CorpusIndex, MatchCandidate, MatchMethod};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

/// A single curated question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// On-disk corpus shape: `{"faqs": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqDocument {
    pub faqs: Vec<FaqEntry>,
}

/// Loads the FAQ document from disk.
///
/// A missing or malformed file is fatal at startup, not a per-request error.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Vec<FaqEntry>, CorpusError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: FaqDocument =
        serde_json::from_str(&raw).map_err(|source| CorpusError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        entries = document.faqs.len(),
        "FAQ document loaded"
    );

    Ok(document.faqs)
}
