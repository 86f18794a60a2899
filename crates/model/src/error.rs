//! Error types for the model crate.
//!
//! Only one thing can go wrong while normalizing form input: the query is
//! blank. Everything else (limit, filter flags) is coerced to a valid value.

use thiserror::Error;

/// Errors raised while turning raw form input into a request.
///
/// The `Display` text is the prompt shown next to the form, so it is written
/// for the person typing the query rather than for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Query text was empty or whitespace-only
    #[error("Please enter a hiring requirement first.")]
    EmptyQuery,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ValidationError>;
