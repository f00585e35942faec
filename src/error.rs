//! Error types shared by the MD5 engine and its consumers.
//!
//! Word and length-counter overflow are not errors: MD5 is defined with
//! wrapping 32-bit and 64-bit arithmetic.

use thiserror::Error;

/// Errors reported while preparing input for the MD5 engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A resumption state was supplied that is not exactly four 32-bit words.
    /// The payload is the number of bytes that were actually supplied.
    #[error("resumption state must be four 32-bit words (16 bytes), got {0} bytes")]
    InvalidState(usize),

    /// Input that was declared hex-encoded could not be decoded.
    #[error("invalid hex input: {0}")]
    EncodingError(#[from] hex::FromHexError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
