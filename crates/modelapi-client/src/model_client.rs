//! High-level Model API client: base URL + token + request primitives.
//!
//! ## Security
//!
//! The token is redacted in Debug output to prevent accidental exposure in
//! logs (tracing spans skip it as well).

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::types::{FilePayload, FileUpload};

/// Client for a Model API backend.
///
/// Holds the immutable base URL and token and exposes the three request
/// primitives every operation helper composes: [`json_request`],
/// [`upload_request`], and [`download_request`].
///
/// [`json_request`]: ModelApiClient::json_request
/// [`upload_request`]: ModelApiClient::upload_request
/// [`download_request`]: ModelApiClient::download_request
///
/// # Example
///
/// ```rust,ignore
/// use modelapi_client::{ModelApiClient, RequestMethod};
///
/// let client = ModelApiClient::new("https://api.example.com", "secret")?;
///
/// let page: Option<serde_json::Value> = client
///     .json_request(RequestMethod::Post, "activities/list/", Some(serde_json::json!({})), &[])
///     .await?;
/// ```
#[derive(Clone)]
pub struct ModelApiClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for ModelApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelApiClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ModelApiClient {
    /// Create a new client with the given base URL and token.
    ///
    /// An empty base URL is accepted here for backward-compatible looseness;
    /// the configuration error surfaces on the first request attempt.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, token, ClientConfig::default())
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Get the base URL (trailing slashes stripped).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the token.
    pub fn token(&self) -> &str {
        &self.token
    }

    fn ensure_base_url(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "baseUrl is required".to_string(),
            )));
        }
        Ok(())
    }

    /// Build the full URL for a path, appending the query string when
    /// `query` is non-empty.
    ///
    /// The base URL keeps no trailing slash and the path keeps no leading
    /// slash, so the join is always a single `/`. Query parameters keep
    /// their insertion order and are percent-encoded.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn request(&self, method: RequestMethod, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        RequestBuilder::new(method, self.url(path, query)).token_auth(self.token.as_str())
    }

    /// Perform a JSON request and deserialize the response.
    ///
    /// Returns `Ok(None)` on 204 No Content; any other 2xx body is parsed
    /// as JSON. Non-2xx statuses become an API error.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn json_request<T: DeserializeOwned>(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        self.ensure_base_url()?;

        let mut request = self.request(method, path, query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.execute(request).await?;
        if response.is_no_content() {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Upload a file via multipart POST.
    ///
    /// The body carries the file in a `file` part and the JSON-serialized
    /// `metadata` in a `__json__` part. The Content-Type header is left to
    /// the HTTP stack since the multipart boundary is transport-specific.
    #[instrument(skip(self, file, metadata), fields(path = %path))]
    pub async fn upload_request<T: DeserializeOwned, M: Serialize>(
        &self,
        path: &str,
        file: FileUpload,
        metadata: &M,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        self.ensure_base_url()?;

        let metadata_json = serde_json::to_string(metadata)?;
        let request = self
            .request(RequestMethod::Post, path, query)
            .multipart(file, metadata_json);

        let response = self.http.execute(request).await?;
        if response.is_no_content() {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Download a file, fully buffered.
    ///
    /// The whole body is read into memory before returning, which caps the
    /// practical file size at available memory; there is no streaming
    /// variant.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn download_request(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<FilePayload> {
        self.ensure_base_url()?;

        let request = self.request(RequestMethod::Get, path, query);
        let response = self.http.execute(request).await?;

        let content_type = response.content_type().unwrap_or_default().to_string();
        let bytes = response.bytes().await?;

        Ok(FilePayload {
            bytes,
            content_type,
        })
    }
}
