//! Error types for modelapi-rest.

/// Result type alias for modelapi-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for modelapi-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Shortcut for a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    /// Returns true if this is a validation error (caught before any
    /// network call).
    pub fn is_validation_error(&self) -> bool {
        match &self.kind {
            ErrorKind::Validation(_) => true,
            ErrorKind::Client(err) => err.is_validation_error(),
        }
    }

    /// Returns true if this is an API error (non-2xx response).
    pub fn is_api_error(&self) -> bool {
        matches!(&self.kind, ErrorKind::Client(err) if err.is_api_error())
    }

    /// Returns the HTTP status code if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Client(err) => err.status(),
            ErrorKind::Validation(_) => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Missing required helper argument; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// Transport-layer error, carried as-is so the original identity
    /// (API status, config, connection failure) is preserved.
    #[error(transparent)]
    Client(modelapi_client::Error),
}

impl From<modelapi_client::Error> for Error {
    fn from(err: modelapi_client::Error) -> Self {
        Error::new(ErrorKind::Client(err))
    }
}
