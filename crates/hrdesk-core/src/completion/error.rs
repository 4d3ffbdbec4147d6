use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("completion provider error: {reason}")]
    Provider { reason: String },

    #[error("completion provider returned no text")]
    EmptyResponse,
}
