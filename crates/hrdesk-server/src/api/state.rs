use std::collections::HashMap;
use std::sync::Arc;

use hrdesk::completion::CompletionBackend;
use hrdesk::embedding::Embedder;
use hrdesk::resolve::ResolutionEngine;

/// Shared state for the API handlers.
pub struct AppState<E: Embedder + 'static, C: CompletionBackend + 'static> {
    pub engine: Arc<ResolutionEngine<E, C>>,

    /// Expected value of the `X-API-Key` header.
    pub api_key: Arc<str>,

    /// Model name behind the completion backend, reported by `/ready`.
    pub completion_model: Arc<str>,

    /// Simulated HRMS data: session id → leave balance.
    pub employee_directory: Arc<HashMap<String, i64>>,

    /// True when the embedder runs without model files.
    pub embedder_stub: bool,
}

impl<E: Embedder, C: CompletionBackend> Clone for AppState<E, C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            api_key: Arc::clone(&self.api_key),
            completion_model: Arc::clone(&self.completion_model),
            employee_directory: Arc::clone(&self.employee_directory),
            embedder_stub: self.embedder_stub,
        }
    }
}

impl<E: Embedder, C: CompletionBackend> AppState<E, C> {
    pub fn new(
        engine: Arc<ResolutionEngine<E, C>>,
        api_key: &str,
        completion_model: &str,
        embedder_stub: bool,
    ) -> Self {
        Self {
            engine,
            api_key: Arc::from(api_key),
            completion_model: Arc::from(completion_model),
            employee_directory: Arc::new(mock_employee_directory()),
            embedder_stub,
        }
    }
}

/// Static stand-in for the HRMS leave-balance lookup.
pub fn mock_employee_directory() -> HashMap<String, i64> {
    HashMap::from([("test123".to_string(), 12), ("emp456".to_string(), 5)])
}
