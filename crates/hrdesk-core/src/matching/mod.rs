//! Lexical (fuzzy) matching against corpus questions.
//!
//! Scores are token-set ratios on a 0-100 scale: order-insensitive token
//! overlap, with [`strsim::normalized_levenshtein`] as the pairwise ratio.
//! Threshold filtering is the resolution engine's job, not this module's.

mod lexical;

#[cfg(test)]
mod tests;

pub use lexical::{LexicalMatcher, token_set_ratio};
