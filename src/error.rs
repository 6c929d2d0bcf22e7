//! Error types shared by the codec, the run orchestration and the CLI config.
//!
//! The codec core (splitting, injection, correction, aggregation) works on
//! typed values and cannot fail. Errors only arise where untyped input enters
//! the crate: payload strings, hex, error positions and command-line flags.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// No payload was supplied
    #[error("Please enter the 128-bit code")]
    MissingInput,

    /// Payload has the wrong length or contains characters other than '0'/'1'
    #[error("Please enter exactly 128 bits (0s and 1s)")]
    MalformedInput {
        /// Number of characters received
        length: usize,
        /// First character outside the binary alphabet, if any
        invalid: Option<char>,
    },

    /// Error position outside 1..=8
    #[error("error position {0} is outside 1..=8")]
    InvalidErrorPosition(u8),

    /// Generic invalid argument
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Hex payload could not be decoded
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Command-line configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error comes from validating a user supplied payload.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingInput | Error::MalformedInput { .. })
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
