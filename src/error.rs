use thiserror::Error;

/// All error types for the corpus builder
#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed search response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("corpus error: {message}")]
    Corpus { message: String },
}

impl Error {
    pub fn corpus(message: impl Into<String>) -> Self {
        Self::Corpus {
            message: message.into(),
        }
    }
}

/// Result type alias for corpus operations
pub type Result<T> = std::result::Result<T, Error>;
