use tracing::{debug, info, instrument, warn};

use crate::classify::CategoryClassifier;
use crate::completion::CompletionBackend;
use crate::constants::{
    DEFAULT_TOP_K, FUZZY_CANDIDATE_FLOOR, FUZZY_SUGGESTION_THRESHOLD, UNKNOWN_CATEGORY,
};
use crate::corpus::{CorpusIndex, FaqEntry, MatchCandidate};
use crate::embedding::Embedder;
use crate::matching::LexicalMatcher;
use crate::session::{PendingSuggestion, SessionStore, is_affirmative};

use super::error::ResolveError;
use super::types::Resolution;

/// Orchestrates corpus matching, session memory and the generative
/// fallback into a single answer-selection decision per query.
///
/// The corpus index, classifier and matcher are read-only after
/// construction; the session store is the only mutable state, and all of
/// its mutations happen before the (unbounded-latency) fallback call, so
/// one session's provider latency never blocks another's.
pub struct ResolutionEngine<E: Embedder, C: CompletionBackend> {
    index: CorpusIndex,
    classifier: CategoryClassifier,
    lexical: LexicalMatcher,
    sessions: SessionStore,
    embedder: E,
    completer: C,
}

impl<E: Embedder, C: CompletionBackend> std::fmt::Debug for ResolutionEngine<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionEngine")
            .field("corpus_entries", &self.index.len())
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

impl<E: Embedder, C: CompletionBackend> ResolutionEngine<E, C> {
    pub fn new(
        index: CorpusIndex,
        classifier: CategoryClassifier,
        sessions: SessionStore,
        embedder: E,
        completer: C,
    ) -> Self {
        Self {
            index,
            classifier,
            lexical: LexicalMatcher::default(),
            sessions,
            embedder,
            completer,
        }
    }

    /// Resolves one query turn for a session.
    ///
    /// The original query casing is preserved for matching and for the
    /// fallback prompt; lower-casing is used for comparisons only.
    #[instrument(skip(self, query), fields(session_id = %session_id, query_len = query.len()))]
    pub async fn answer(&self, query: &str, session_id: &str) -> Result<Resolution, ResolveError> {
        let normalized = query.trim().to_lowercase();

        // A bare affirmative redeems the session's pending suggestion. With
        // nothing pending it falls through to normal matching.
        if is_affirmative(&normalized) {
            if let Some(pending) = self.sessions.consume_confirmation(session_id) {
                let entry = self.entry(pending.entry_index)?;
                info!(
                    entry_index = pending.entry_index,
                    "Confirmation consumed, returning stored answer"
                );
                return Ok(Resolution::Answered {
                    entry_index: pending.entry_index,
                    answer: entry.answer.clone(),
                });
            }
            debug!("Affirmative reply with no pending suggestion, matching normally");
        }

        let query_embedding = self.embedder.embed(query)?;

        // Advisory only: never gates the pipeline.
        let category = self.classifier.classify(&query_embedding);
        debug!(category = category.unwrap_or(UNKNOWN_CATEGORY), "Query categorized");

        let semantic = self.index.nearest(&query_embedding, DEFAULT_TOP_K);
        let fuzzy: Vec<MatchCandidate> = self
            .lexical
            .rank(query, &self.index)
            .into_iter()
            .filter(|c| c.score >= FUZZY_CANDIDATE_FLOOR)
            .collect();

        let Some(best) = fuzzy.first() else {
            // Policy choice: the semantic ranking does not participate in
            // the fallback decision; the strongest discarded score is
            // logged so the signal stays visible.
            if let Some(top) = semantic.first() {
                debug!(
                    semantic_score = top.score,
                    entry_index = top.entry_index,
                    "No fuzzy candidate above floor, delegating"
                );
            }
            return Ok(self.delegate(query).await);
        };

        // Last-suggested wins, even when this turn ends up delegated.
        self.sessions
            .record_suggestion(session_id, PendingSuggestion::new(best.entry_index));

        let entry = self.entry(best.entry_index)?;

        if entry.question.trim().to_lowercase() == normalized {
            info!(
                entry_index = best.entry_index,
                "Direct hit, returning stored answer"
            );
            return Ok(Resolution::Answered {
                entry_index: best.entry_index,
                answer: entry.answer.clone(),
            });
        }

        if best.score >= FUZZY_SUGGESTION_THRESHOLD {
            info!(
                entry_index = best.entry_index,
                score = best.score,
                "High-confidence candidate, offering suggestion"
            );
            return Ok(Resolution::Suggested {
                entry_index: best.entry_index,
                prompt: format!("Did you mean: '{}'?", entry.question),
            });
        }

        debug!(
            score = best.score,
            "Best candidate below suggestion threshold, delegating"
        );
        Ok(self.delegate(query).await)
    }

    /// Advisory category label for a query (`"unknown"` when no category
    /// clears the confidence floor).
    pub fn classify(&self, query: &str) -> Result<String, ResolveError> {
        let query_embedding = self.embedder.embed(query)?;
        Ok(self
            .classifier
            .classify(&query_embedding)
            .unwrap_or(UNKNOWN_CATEGORY)
            .to_string())
    }

    /// The FAQ corpus this engine answers from.
    pub fn corpus(&self) -> &CorpusIndex {
        &self.index
    }

    /// The per-session confirmation memory.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    async fn delegate(&self, query: &str) -> Resolution {
        match self.completer.complete(query).await {
            Ok(text) => Resolution::Delegated { text },
            // The conversation never dies on a fallback failure; the user
            // gets a tagged error string instead.
            Err(e) => {
                warn!(error = %e, "Generative fallback failed");
                Resolution::Delegated {
                    text: format!("[ERROR] Generative fallback failed: {e}"),
                }
            }
        }
    }

    fn entry(&self, index: usize) -> Result<&FaqEntry, ResolveError> {
        self.index
            .entry(index)
            .ok_or(ResolveError::EntryOutOfBounds { index })
    }
}
