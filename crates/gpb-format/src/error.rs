//! Error types for GPB decoding.

/// Errors produced while decoding a GPB stream.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The underlying stream failed, or ended before the requested byte
    /// count could be filled. A short read is a hard decode error, never
    /// undefined behavior.
    #[error("stream read failed or truncated: {0}")]
    Io(#[from] std::io::Error),

    /// A length-prefixed string was not valid UTF-8.
    #[error("string is not valid UTF-8: {0}")]
    InvalidString(#[from] std::string::FromUtf8Error),
}

/// Result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
