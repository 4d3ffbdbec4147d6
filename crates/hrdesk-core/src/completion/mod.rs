//! Generative fallback: the completion service consulted when no corpus
//! match is confident enough.
//!
//! The provider call is bounded by a hard timeout. Failure policy lives in
//! the resolution engine: any error here becomes an error-tagged string so
//! the conversation never terminates on a fallback failure.

mod error;

#[cfg(test)]
mod tests;

pub use error::CompletionError;

use std::time::Duration;

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::debug;

use crate::constants::{
    COMPLETION_SYSTEM_INSTRUCTION, COMPLETION_TIMEOUT_SECS, DEFAULT_COMPLETION_MAX_TOKENS,
    DEFAULT_COMPLETION_MODEL, DEFAULT_COMPLETION_TEMPERATURE,
};

/// Parameters for fallback completions.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model requested from the provider.
    pub model: String,
    /// System instruction sent with every request.
    pub system_instruction: String,
    /// Token budget per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Hard deadline for a single call.
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            system_instruction: COMPLETION_SYSTEM_INSTRUCTION.to_string(),
            max_tokens: DEFAULT_COMPLETION_MAX_TOKENS,
            temperature: DEFAULT_COMPLETION_TEMPERATURE,
            timeout: Duration::from_secs(COMPLETION_TIMEOUT_SECS),
        }
    }
}

impl CompletionConfig {
    /// Default config with a different model.
    pub fn with_model<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// Free-text completion service. Treated as a black box: a prompt goes in,
/// text or an error comes out.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, query: &str) -> Result<String, CompletionError>;
}

/// Completion backend on top of the `genai` provider client.
pub struct GenAiCompleter {
    client: Client,
    config: CompletionConfig,
}

impl std::fmt::Debug for GenAiCompleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiCompleter")
            .field("model", &self.config.model)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl GenAiCompleter {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: Client::default(),
            config,
        }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionBackend for GenAiCompleter {
    async fn complete(&self, query: &str) -> Result<String, CompletionError> {
        let chat_req = ChatRequest::new(vec![
            ChatMessage::system(self.config.system_instruction.as_str()),
            ChatMessage::user(query),
        ]);

        let options = ChatOptions::default()
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        debug!(
            model = %self.config.model,
            query_len = query.len(),
            "Calling completion provider"
        );

        let response = tokio::time::timeout(
            self.config.timeout,
            self.client
                .exec_chat(&self.config.model, chat_req, Some(&options)),
        )
        .await
        .map_err(|_| CompletionError::Timeout {
            seconds: self.config.timeout.as_secs(),
        })?
        .map_err(|e| CompletionError::Provider {
            reason: e.to_string(),
        })?;

        let text = response
            .first_text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(CompletionError::EmptyResponse)?;

        Ok(text.to_string())
    }
}

/// Mock completion backend for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Default)]
pub struct MockCompleter {
    response: Option<String>,
    fail: bool,
}

#[cfg(any(test, feature = "mock"))]
impl MockCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answers with `response`.
    pub fn with_response<S: Into<String>>(response: S) -> Self {
        Self {
            response: Some(response.into()),
            fail: false,
        }
    }

    /// Always fails with a provider error.
    pub fn failing() -> Self {
        Self {
            response: None,
            fail: true,
        }
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl CompletionBackend for MockCompleter {
    async fn complete(&self, query: &str) -> Result<String, CompletionError> {
        if self.fail {
            return Err(CompletionError::Provider {
                reason: "mock provider failure".to_string(),
            });
        }

        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| format!("Mock completion for: {query}")))
    }
}
