use super::*;
use crate::classify::CategoryClassifier;
use crate::completion::MockCompleter;
use crate::corpus::{CorpusIndex, FaqEntry};
use crate::embedding::StaticEmbedder;
use crate::session::SessionStore;

const DIM: usize = 4;

fn entries(pairs: &[(&str, &str)]) -> Vec<FaqEntry> {
    pairs
        .iter()
        .map(|(question, answer)| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            category: None,
        })
        .collect()
}

fn engine_with(
    pairs: &[(&str, &str)],
    embedder: StaticEmbedder,
    completer: MockCompleter,
) -> ResolutionEngine<StaticEmbedder, MockCompleter> {
    let index = CorpusIndex::build(entries(pairs), &embedder).unwrap();
    let classifier =
        CategoryClassifier::build(&[("leave", &["leave exemplar"])], &embedder).unwrap();
    ResolutionEngine::new(index, classifier, SessionStore::new(), embedder, completer)
}

fn hr_engine(completer: MockCompleter) -> ResolutionEngine<StaticEmbedder, MockCompleter> {
    engine_with(
        &[
            ("What is the leave policy?", "Employees get 20 days annually."),
            (
                "When will I get my salary?",
                "Salaries are credited on the last working day.",
            ),
        ],
        StaticEmbedder::new(DIM),
        completer,
    )
}

#[tokio::test]
async fn test_direct_hit_is_case_insensitive() {
    let engine = hr_engine(MockCompleter::failing());

    let resolution = engine.answer("what is the leave policy?", "s1").await.unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Answered);
    assert_eq!(resolution.text(), "Employees get 20 days annually.");
}

#[tokio::test]
async fn test_direct_hit_ignores_surrounding_whitespace() {
    let engine = hr_engine(MockCompleter::failing());

    let resolution = engine
        .answer("  WHAT IS THE LEAVE POLICY?  ", "s1")
        .await
        .unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Answered);
}

#[tokio::test]
async fn test_suggestion_then_confirmation() {
    let engine = hr_engine(MockCompleter::new());

    // Same token set but not string-equal, so this suggests rather than
    // answers.
    let first = engine.answer("what is the leave policy", "s1").await.unwrap();
    assert_eq!(first.status(), ResolveStatus::Suggested);
    assert_eq!(first.text(), "Did you mean: 'What is the leave policy?'?");

    let second = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(second.status(), ResolveStatus::Answered);
    assert_eq!(second.text(), "Employees get 20 days annually.");
}

#[tokio::test]
async fn test_confirmation_is_consumed_once() {
    let engine = hr_engine(MockCompleter::new());

    engine.answer("what is the leave policy", "s1").await.unwrap();
    engine.answer("yes", "s1").await.unwrap();

    // Nothing pending anymore; a second "yes" matches normally and
    // delegates.
    let third = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(third.status(), ResolveStatus::Delegated);
}

#[tokio::test]
async fn test_confirmation_does_not_leak_across_sessions() {
    let engine = hr_engine(MockCompleter::new());

    engine.answer("what is the leave policy", "s1").await.unwrap();

    let other = engine.answer("yes", "s2").await.unwrap();
    assert_eq!(other.status(), ResolveStatus::Delegated);
}

#[tokio::test]
async fn test_affirmative_variants_confirm() {
    for affirmative in ["yes", "Yeah", " Y "] {
        let engine = hr_engine(MockCompleter::new());
        engine.answer("what is the leave policy", "s1").await.unwrap();

        let resolution = engine.answer(affirmative, "s1").await.unwrap();
        assert_eq!(resolution.status(), ResolveStatus::Answered, "{affirmative:?}");
    }
}

#[tokio::test]
async fn test_latest_suggestion_wins() {
    let engine = hr_engine(MockCompleter::new());

    engine.answer("what is the leave policy", "s1").await.unwrap();
    engine.answer("when will I get my salary", "s1").await.unwrap();

    let confirmed = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(
        confirmed.text(),
        "Salaries are credited on the last working day."
    );
}

#[tokio::test]
async fn test_unmatched_query_delegates() {
    let engine = hr_engine(MockCompleter::new());

    let resolution = engine.answer("what's the weather today", "s1").await.unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Delegated);
    assert_eq!(
        resolution.text(),
        "Mock completion for: what's the weather today"
    );
}

#[tokio::test]
async fn test_fallback_failure_returns_tagged_error() {
    let engine = hr_engine(MockCompleter::failing());

    let resolution = engine.answer("what's the weather today", "s1").await.unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Delegated);
    assert!(resolution.text().starts_with("[ERROR]"), "{}", resolution.text());
    assert!(resolution.text().contains("mock provider failure"));
}

#[tokio::test]
async fn test_empty_query_delegates() {
    let engine = hr_engine(MockCompleter::new());

    let resolution = engine.answer("", "s1").await.unwrap();
    assert_eq!(resolution.status(), ResolveStatus::Delegated);

    let resolution = engine.answer("   ", "s1").await.unwrap();
    assert_eq!(resolution.status(), ResolveStatus::Delegated);
}

#[tokio::test]
async fn test_score_at_floor_is_retained_as_suggestion() {
    // "abc" vs "abcd" scores exactly 75: retained, below the suggestion
    // bar, so the turn delegates but records the candidate.
    let engine = engine_with(
        &[("abcd", "floor answer")],
        StaticEmbedder::new(DIM),
        MockCompleter::new(),
    );

    let first = engine.answer("abc", "s1").await.unwrap();
    assert_eq!(first.status(), ResolveStatus::Delegated);

    let confirmed = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(confirmed.status(), ResolveStatus::Answered);
    assert_eq!(confirmed.text(), "floor answer");
}

#[tokio::test]
async fn test_score_below_floor_is_discarded() {
    // "ab" vs "abc" scores ~66.7: below the floor, nothing is recorded.
    let engine = engine_with(
        &[("abc", "unreachable answer")],
        StaticEmbedder::new(DIM),
        MockCompleter::new(),
    );

    let first = engine.answer("ab", "s1").await.unwrap();
    assert_eq!(first.status(), ResolveStatus::Delegated);

    let followup = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(followup.status(), ResolveStatus::Delegated);
}

#[tokio::test]
async fn test_score_at_suggestion_threshold_prompts() {
    // 17 a's vs 20 a's scores exactly 85.
    let question = "a".repeat(20);
    let engine = engine_with(
        &[(question.as_str(), "suggestion answer")],
        StaticEmbedder::new(DIM),
        MockCompleter::new(),
    );

    let resolution = engine.answer(&"a".repeat(17), "s1").await.unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Suggested);
    assert_eq!(resolution.text(), format!("Did you mean: '{question}'?"));
}

#[tokio::test]
async fn test_score_below_suggestion_threshold_delegates() {
    // 21 a's vs 25 a's scores 84: above the floor, below the bar.
    let question = "a".repeat(25);
    let engine = engine_with(
        &[(question.as_str(), "suggestion answer")],
        StaticEmbedder::new(DIM),
        MockCompleter::new(),
    );

    let first = engine.answer(&"a".repeat(21), "s1").await.unwrap();
    assert_eq!(first.status(), ResolveStatus::Delegated);

    // The candidate was still recorded for confirmation.
    let confirmed = engine.answer("yes", "s1").await.unwrap();
    assert_eq!(confirmed.text(), "suggestion answer");
}

#[tokio::test]
async fn test_repeated_queries_are_deterministic() {
    let engine = hr_engine(MockCompleter::new());

    let first = engine.answer("what is the leave policy", "s1").await.unwrap();
    let second = engine.answer("what is the leave policy", "s2").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_classify_returns_label_and_unknown() {
    let embedder = StaticEmbedder::new(DIM)
        .insert("leave exemplar", vec![1.0, 0.0, 0.0, 0.0])
        .insert("how do I take leave", vec![1.0, 0.0, 0.0, 0.0]);

    let engine = engine_with(
        &[("What is the leave policy?", "Employees get 20 days annually.")],
        embedder,
        MockCompleter::new(),
    );

    assert_eq!(engine.classify("how do I take leave").unwrap(), "leave");
    // Unseen text embeds to zeros and matches nothing.
    assert_eq!(engine.classify("completely unrelated").unwrap(), "unknown");
}

#[tokio::test]
async fn test_answer_does_not_touch_fallback_on_direct_hit() {
    // A failing completer proves the direct-hit path never calls it.
    let engine = hr_engine(MockCompleter::failing());

    let resolution = engine
        .answer("WHAT IS THE LEAVE POLICY?", "s1")
        .await
        .unwrap();

    assert_eq!(resolution.status(), ResolveStatus::Answered);
    assert_eq!(resolution.text(), "Employees get 20 days annually.");
}
