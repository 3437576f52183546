//! Error types for message-types crate.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a [`crate::Message`].
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Protobuf encoding error: {0}")]
    Encode(String),

    #[error("Protobuf decoding error: {0}")]
    Decode(String),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
