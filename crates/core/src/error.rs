//! Error types for the live translation service

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type shared across crates
#[derive(Error, Debug)]
pub enum Error {
    /// Word cursor must be monotonic outside of reset
    #[error("Cursor cannot move backwards: requested {requested}, current {current}")]
    InvalidCursor { current: usize, requested: usize },

    /// Required request field missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing credential or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success response, network failure, or malformed payload
    /// from an external service
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Translation failed
    #[error("Translation error: {0}")]
    Translation(String),

    /// Transcription failed
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Recognition or synthesis capability absent in the runtime; the
    /// feature is disabled, the rest of the app stays usable
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// Event channel closed
    #[error("Channel closed")]
    ChannelClosed,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a validation error from a string
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a config error from a string
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an upstream error from a string
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        Error::Upstream(msg.into())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
