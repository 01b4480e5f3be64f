//! Conversion errors.

use thiserror::Error;

/// The associated error of the method to convert a byte slice into a fixed hash.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromSliceError {
    /// The input slice has an incorrect length.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}

/// The associated error of [`FromStr`](std::str::FromStr) for fixed hashes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromStrError {
    /// The input string has an incorrect length.
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    /// The input string contains a character which is not a hex digit.
    #[error("invalid hex character")]
    InvalidCharacter,
}
