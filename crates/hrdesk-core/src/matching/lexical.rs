use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use crate::constants::DEFAULT_TOP_K;
use crate::corpus::{CorpusIndex, MatchCandidate, MatchMethod};

/// Ranks corpus questions by token-set fuzzy similarity to a query.
///
/// Independent of embeddings; operates on the raw strings only.
#[derive(Debug, Clone)]
pub struct LexicalMatcher {
    top_k: usize,
}

impl Default for LexicalMatcher {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl LexicalMatcher {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    /// Returns the top candidates by score descending, ties broken by
    /// lowest entry index. No threshold is applied here.
    pub fn rank(&self, query: &str, index: &CorpusIndex) -> Vec<MatchCandidate> {
        let query_tokens = tokenize(query);

        let mut candidates: Vec<MatchCandidate> = index
            .entries()
            .iter()
            .enumerate()
            .map(|(entry_index, entry)| MatchCandidate {
                entry_index,
                score: token_set_ratio_of(&query_tokens, &tokenize(&entry.question)) as f32,
                method: MatchMethod::Fuzzy,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entry_index.cmp(&b.entry_index))
        });
        candidates.truncate(self.top_k);

        debug!(
            best_score = candidates.first().map(|c| c.score),
            "Lexical ranking complete"
        );

        candidates
    }
}

/// Token-set fuzzy ratio between two strings, 0-100.
///
/// Identical token sets score 100 regardless of word order; a string whose
/// tokens are a subset of the other's also scores 100. Either side
/// tokenizing to the empty set scores 0.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_ratio_of(&tokenize(a), &tokenize(b))
}

fn token_set_ratio_of(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = a.intersection(b).map(String::as_str).collect();
    let diff_ab: Vec<&str> = a.difference(b).map(String::as_str).collect();
    let diff_ba: Vec<&str> = b.difference(a).map(String::as_str).collect();

    let sect_str = sect.join(" ");
    let sect_ab = join_with_base(&sect_str, &diff_ab);
    let sect_ba = join_with_base(&sect_str, &diff_ba);

    // Equal token sets, any word order.
    if sect_ab == sect_ba {
        return 100.0;
    }

    let ratio = [
        strsim::normalized_levenshtein(&sect_str, &sect_ab),
        strsim::normalized_levenshtein(&sect_str, &sect_ba),
        strsim::normalized_levenshtein(&sect_ab, &sect_ba),
    ]
    .into_iter()
    .fold(0.0f64, f64::max);

    ratio * 100.0
}

fn join_with_base(base: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return rest.join(" ");
    }
    format!("{} {}", base, rest.join(" "))
}

/// Lower-cased alphanumeric token set of a string.
///
/// `BTreeSet` keeps iteration sorted, so joined strings are deterministic.
fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
