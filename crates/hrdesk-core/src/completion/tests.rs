use super::*;

#[tokio::test]
async fn test_mock_completer_echoes_query() {
    let completer = MockCompleter::new();
    let text = completer.complete("what's the weather today").await.unwrap();
    assert_eq!(text, "Mock completion for: what's the weather today");
}

#[tokio::test]
async fn test_mock_completer_fixed_response() {
    let completer = MockCompleter::with_response("canned answer");
    assert_eq!(completer.complete("anything").await.unwrap(), "canned answer");
}

#[tokio::test]
async fn test_mock_completer_failure() {
    let completer = MockCompleter::failing();
    let err = completer.complete("anything").await.unwrap_err();
    assert!(matches!(err, CompletionError::Provider { .. }));
    assert!(err.to_string().contains("mock provider failure"));
}

#[test]
fn test_default_config_matches_policy() {
    let config = CompletionConfig::default();
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert_eq!(config.max_tokens, 250);
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.timeout.as_secs(), 60);
    assert!(config.system_instruction.contains("HR assistant"));
}

#[test]
fn test_with_model_overrides_model_only() {
    let config = CompletionConfig::with_model("gpt-4o-mini");
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.max_tokens, 250);
}
