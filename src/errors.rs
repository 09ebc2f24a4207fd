use thiserror::Error;

// Failures that stop validation before it starts. Validation problems are data, see `ValidationError`.
#[derive(Debug, Error)]
pub enum Error {
    // The input text is not well-formed JSON
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    // Reading the input failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for results that use `Error` as the error type
pub type Result<T> = std::result::Result<T, Error>;
