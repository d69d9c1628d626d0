//! Error types for modelapi-client.

/// Result type alias for modelapi-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for modelapi-client operations.
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

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shortcut for a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    /// Returns true if this is an API error (non-2xx response).
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// Returns true if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns the HTTP status code if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-2xx HTTP response from the backend.
    ///
    /// The message carries the status code, the status text, and the raw
    /// response body so failures are diagnosable from the error alone.
    #[error("API Error: {status} {status_text} {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Missing or invalid helper argument, caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// Invalid client configuration (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection-level failure (DNS, refused, reset).
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other transport failure surfaced unchanged from the HTTP stack.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_contents() {
        let err = Error::new(ErrorKind::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "{\"detail\":\"No Activity matches the given query.\"}".to_string(),
        });

        let display = err.to_string();
        assert!(display.contains("API Error"), "{display}");
        assert!(display.contains("404"), "{display}");
        assert!(display.contains("Not Found"), "{display}");
        assert!(display.contains("No Activity matches"), "{display}");
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_error_message_is_verbatim() {
        let err = Error::validation("fileField is required");
        assert_eq!(err.to_string(), "fileField is required");
        assert!(err.is_validation_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error() {
        let err = Error::new(ErrorKind::Config("baseUrl is required".to_string()));
        assert!(err.is_config_error());
        assert!(err.to_string().contains("baseUrl is required"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_error_with_source() {
        let source_err = std::io::Error::other("connection reset");
        let err = Error::with_source(ErrorKind::Other("request failed".into()), source_err);

        assert!(err.source.is_some());
        assert_eq!(err.to_string(), "request failed");
    }
}
