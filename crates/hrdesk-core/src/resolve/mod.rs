//! Answer resolution: the decision pipeline that selects among session
//! confirmation, corpus matches, and the generative fallback.
//!
//! Per query the engine moves through checking-confirmation, matching, and
//! deciding, and terminates in exactly one of three outcomes: a stored
//! answer, a disambiguation prompt, or a delegated completion. Only the
//! session's pending-suggestion memory carries across turns.

mod engine;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use engine::ResolutionEngine;
pub use error::ResolveError;
pub use types::{HRDESK_STATUS_HEADER, Resolution, ResolveStatus};
