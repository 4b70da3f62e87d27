//! # Recipe Errors
//!
//! The lessons themselves never fail: every operation they show is a total
//! function. The only fallible step in the crate is looking a principle up by
//! name, so this is the only error type.

/// Errors raised by the catalog around the lessons.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("Unknown principle: {0}")]
    UnknownPrinciple(String),
}
