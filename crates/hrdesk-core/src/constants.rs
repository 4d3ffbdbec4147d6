//! Cross-cutting, shared constants.
//!
//! The match thresholds are treated as fixed policy across modules: the
//! resolution engine, its tests, and the host all read them from here.
//! Fuzzy scores live on a 0-100 scale, cosine similarities on -1.0..=1.0.

/// Number of candidates requested from both the semantic and lexical rankers.
pub const DEFAULT_TOP_K: usize = 5;

/// Fuzzy candidates below this score are discarded before the decision step.
/// Inclusive: a score of exactly 75 survives.
pub const FUZZY_CANDIDATE_FLOOR: f32 = 75.0;

/// Minimum fuzzy score at which the engine offers a "Did you mean" prompt
/// instead of delegating. Inclusive.
pub const FUZZY_SUGGESTION_THRESHOLD: f32 = 85.0;

/// A category label is returned only when its best exemplar similarity is
/// strictly above this floor.
pub const CATEGORY_CONFIDENCE_FLOOR: f32 = 0.75;

/// Label reported when no category clears [`CATEGORY_CONFIDENCE_FLOOR`].
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Replies recognized as confirming a pending suggestion, after trimming
/// and lower-casing.
pub const AFFIRMATIVE_TOKENS: &[&str] = &["yes", "yeah", "y"];

/// Hard deadline for a single generative fallback call.
pub const COMPLETION_TIMEOUT_SECS: u64 = 60;

/// Default completion model requested from the provider.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Default token budget for fallback completions.
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 250;

/// Default sampling temperature for fallback completions.
pub const DEFAULT_COMPLETION_TEMPERATURE: f64 = 0.7;

/// System instruction sent with every fallback completion.
pub const COMPLETION_SYSTEM_INSTRUCTION: &str =
    "You are an HR assistant helping employees with HR-related queries.";

/// Pending suggestions expire this long after the last write.
pub const SESSION_TTL_SECS: u64 = 30 * 60;

/// Upper bound on concurrently tracked sessions (LRU eviction past this).
pub const SESSION_MAX_CAPACITY: u64 = 100_000;
