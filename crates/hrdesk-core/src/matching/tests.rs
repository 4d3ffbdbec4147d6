use super::*;
use crate::corpus::{CorpusIndex, FaqEntry, MatchMethod};
use crate::embedding::StaticEmbedder;

fn entry(question: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: format!("answer to {question}"),
        category: None,
    }
}

fn index_of(questions: &[&str]) -> CorpusIndex {
    let entries = questions.iter().map(|q| entry(q)).collect();
    CorpusIndex::build(entries, &StaticEmbedder::new(2)).unwrap()
}

#[test]
fn test_identical_strings_score_100() {
    assert_eq!(
        token_set_ratio("what is the leave policy", "what is the leave policy"),
        100.0
    );
}

#[test]
fn test_word_order_is_ignored() {
    assert_eq!(
        token_set_ratio("policy leave the is what", "what is the leave policy"),
        100.0
    );
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    assert_eq!(
        token_set_ratio("What is the leave policy?", "what is the LEAVE policy"),
        100.0
    );
}

#[test]
fn test_token_subset_scores_100() {
    assert_eq!(token_set_ratio("leave policy", "what is the leave policy"), 100.0);
}

#[test]
fn test_empty_query_scores_zero() {
    assert_eq!(token_set_ratio("", "what is the leave policy"), 0.0);
    assert_eq!(token_set_ratio("   ?!", "what is the leave policy"), 0.0);
}

#[test]
fn test_disjoint_tokens_score_low() {
    let score = token_set_ratio("weather today", "salary slip");
    assert!(score < 50.0, "score was {score}");
}

#[test]
fn test_single_edit_ratio_is_exact() {
    // "abc" vs "abcd": one edit over max length 4.
    let score = token_set_ratio("abc", "abcd");
    assert!((score - 75.0).abs() < 1e-9, "score was {score}");
}

#[test]
fn test_three_edits_over_twenty_is_85() {
    let score = token_set_ratio(&"a".repeat(17), &"a".repeat(20));
    assert!((score - 85.0).abs() < 1e-9, "score was {score}");
}

#[test]
fn test_misspelled_query_scores_above_floor() {
    let score = token_set_ratio("wat is da leeve policy", "What is the leave policy?");
    assert!(score >= 60.0, "score was {score}");
    assert!(score < 100.0, "score was {score}");
}

#[test]
fn test_rank_orders_by_score_descending() {
    let index = index_of(&[
        "How do I report workplace harassment?",
        "What is the leave policy?",
        "Can I carry forward my unused leaves?",
    ]);

    let candidates = LexicalMatcher::default().rank("what is the leave policy", &index);

    assert_eq!(candidates[0].entry_index, 1);
    assert_eq!(candidates[0].score, 100.0);
    assert!(candidates.iter().all(|c| c.method == MatchMethod::Fuzzy));
    for pair in candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_rank_truncates_to_top_k() {
    let index = index_of(&["q1 a", "q2 b", "q3 c", "q4 d", "q5 e", "q6 f", "q7 g"]);
    let candidates = LexicalMatcher::default().rank("q1", &index);
    assert_eq!(candidates.len(), 5);

    let candidates = LexicalMatcher::new(2).rank("q1", &index);
    assert_eq!(candidates.len(), 2);
}

#[test]
fn test_rank_breaks_ties_by_lowest_index() {
    // Entries 1 and 2 have identical token sets, so identical scores.
    let index = index_of(&["something else", "leave policy", "policy leave"]);

    let candidates = LexicalMatcher::default().rank("leave policy", &index);

    assert_eq!(candidates[0].entry_index, 1);
    assert_eq!(candidates[1].entry_index, 2);
    assert_eq!(candidates[0].score, candidates[1].score);
}

#[test]
fn test_rank_is_deterministic() {
    let index = index_of(&["alpha beta", "beta gamma", "gamma delta"]);
    let matcher = LexicalMatcher::default();
    assert_eq!(
        matcher.rank("beta", &index),
        matcher.rank("beta", &index)
    );
}
