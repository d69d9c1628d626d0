//! HTTP request building with Model API conventions.

use std::collections::HashMap;

use crate::types::FileUpload;

/// HTTP request method.
///
/// The Model API convention only ever issues these three verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests against a Model API backend.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) token: Option<String>,
}

/// Request body content.
#[derive(Debug)]
pub enum RequestBody {
    /// JSON body, sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Multipart body with a `file` part and a `__json__` metadata part.
    /// Content-Type is left to the HTTP stack (boundary is transport-specific).
    Multipart {
        file: FileUpload,
        metadata_json: String,
    },
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            token: None,
        }
    }

    /// Set the token for the `Authorization: Token <value>` header.
    pub fn token_auth(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self
    }

    /// Set a multipart body carrying a file and its JSON metadata.
    pub fn multipart(mut self, file: FileUpload, metadata_json: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Multipart {
            file,
            metadata_json: metadata_json.into(),
        });
        self
    }
}
