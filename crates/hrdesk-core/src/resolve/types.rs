/// Response header carrying the [`ResolveStatus`] of a chat turn.
pub const HRDESK_STATUS_HEADER: &str = "X-Hrdesk-Status";

/// Terminal outcome of a resolution turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A stored corpus answer was returned.
    Answered {
        /// Corpus index of the answering entry.
        entry_index: usize,
        /// The stored answer text.
        answer: String,
    },
    /// A disambiguation prompt was offered; the answer awaits confirmation
    /// on a later turn.
    Suggested {
        /// Corpus index of the suggested entry.
        entry_index: usize,
        /// The `Did you mean: '...'?` prompt.
        prompt: String,
    },
    /// The query was delegated to the generative fallback.
    Delegated {
        /// Completion text, or an error-tagged string on fallback failure.
        text: String,
    },
}

impl Resolution {
    pub fn status(&self) -> ResolveStatus {
        match self {
            Resolution::Answered { .. } => ResolveStatus::Answered,
            Resolution::Suggested { .. } => ResolveStatus::Suggested,
            Resolution::Delegated { .. } => ResolveStatus::Delegated,
        }
    }

    /// The user-visible text of this turn.
    pub fn text(&self) -> &str {
        match self {
            Resolution::Answered { answer, .. } => answer,
            Resolution::Suggested { prompt, .. } => prompt,
            Resolution::Delegated { text } => text,
        }
    }

    /// Consumes the resolution, returning the user-visible text.
    pub fn into_text(self) -> String {
        match self {
            Resolution::Answered { answer, .. } => answer,
            Resolution::Suggested { prompt, .. } => prompt,
            Resolution::Delegated { text } => text,
        }
    }
}

/// Status of a completed resolution turn, surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStatus {
    Answered,
    Suggested,
    Delegated,
}

impl ResolveStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            ResolveStatus::Answered => "ANSWERED",
            ResolveStatus::Suggested => "SUGGESTED",
            ResolveStatus::Delegated => "DELEGATED",
        }
    }

    /// Returns `true` if the turn was settled from the corpus.
    #[inline]
    pub fn is_corpus_hit(&self) -> bool {
        !matches!(self, ResolveStatus::Delegated)
    }
}

impl std::fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
