//! Errors raised at the text boundary of the digest API.

use thiserror::Error;

/// Error returned when a message is rejected before hashing.
///
/// Rejection is deterministic: retrying with the same input fails the same way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InvalidInputError {
    /// The message contained no characters.
    #[error("invalid input: message must be a non-empty string")]
    Empty,
    /// The message bytes were not valid UTF-8 text.
    #[error("invalid input: message is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    NotUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for InvalidInputError {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::NotUtf8 {
            valid_up_to: error.valid_up_to(),
        }
    }
}
