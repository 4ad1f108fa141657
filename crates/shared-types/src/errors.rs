//! # Error Types
//!
//! Errors raised while parsing shared identifiers.

use thiserror::Error;

/// Errors that can occur when validating an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Identifier string was empty.
    #[error("Identifier is empty")]
    Empty,

    /// Identifier exceeds the maximum length.
    #[error("Identifier too long: {len} bytes (max {max})")]
    TooLong { len: usize, max: usize },

    /// Identifier contains a character outside `[A-Za-z0-9_-]`.
    #[error("Invalid character in identifier: {0:?}")]
    InvalidCharacter(char),
}
