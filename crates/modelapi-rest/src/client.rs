//! Model API operation helpers.
//!
//! This client wraps `ModelApiClient` from `modelapi-client` and provides
//! one typed method per Model API verb: list, retrieve, retrieve-file,
//! save, delete, upload, and action execution.

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use modelapi_client::{ClientConfig, FilePayload, FileUpload, ModelApiClient, RequestMethod};

use crate::error::{Error, Result};

/// pk value reserved for static (no-instance) action execution.
pub const STATIC_PK: u64 = 0;

/// Typed client for the Model API resource operations.
///
/// Every method is a thin composition: validate trivial preconditions,
/// build the conventional path, delegate to the transport primitives, and
/// surface the outcome as a `Result`. The backend's record shapes stay
/// caller-supplied (`T: DeserializeOwned`); the library is shape-agnostic.
///
/// # Example
///
/// ```rust,ignore
/// use modelapi_rest::ModelRestClient;
///
/// let api = ModelRestClient::new("https://api.example.com", "token")?;
///
/// // List with default (empty) filters
/// let activities: Option<serde_json::Value> = api.list("activities", None, &[]).await?;
///
/// // Retrieve one record
/// let activity: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await?;
///
/// // Save
/// let saved: Option<serde_json::Value> =
///     api.save("activities", &serde_json::json!({"name": "Test"}), &[]).await?;
///
/// // Delete
/// api.delete("activities", 1, &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ModelRestClient {
    client: ModelApiClient,
}

impl ModelRestClient {
    /// Create a new client with the given base URL and token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = ModelApiClient::new(base_url, token)?;
        Ok(Self { client })
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ModelApiClient::with_config(base_url, token, config)?;
        Ok(Self { client })
    }

    /// Create a client from an existing ModelApiClient.
    pub fn from_client(client: ModelApiClient) -> Self {
        Self { client }
    }

    /// Get the underlying ModelApiClient.
    pub fn inner(&self) -> &ModelApiClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// List records, optionally filtered.
    ///
    /// Issues `POST /{model}/list/` with `filters` as the body (an empty
    /// object when absent, matching the backend convention).
    #[instrument(skip(self, filters))]
    pub async fn list<T: DeserializeOwned>(
        &self,
        model: &str,
        filters: Option<serde_json::Value>,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let path = format!("{model}/list/");
        let body = filters.unwrap_or_else(|| serde_json::json!({}));
        self.client
            .json_request(RequestMethod::Post, &path, Some(body), query)
            .await
            .map_err(Into::into)
    }

    /// Retrieve a single record by pk.
    ///
    /// Issues `GET /{model}/retrieve/{pk}/`.
    #[instrument(skip(self))]
    pub async fn retrieve<T: DeserializeOwned>(
        &self,
        model: &str,
        pk: u64,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let path = format!("{model}/retrieve/{pk}/");
        self.client
            .json_request(RequestMethod::Get, &path, None, query)
            .await
            .map_err(Into::into)
    }

    /// Download the file stored in `file_field` of a record.
    ///
    /// Issues `GET /{model}/retrieve-file/{pk}/?file-field={field}` and
    /// returns the fully buffered payload.
    #[instrument(skip(self))]
    pub async fn retrieve_file(
        &self,
        model: &str,
        pk: u64,
        file_field: &str,
        query: &[(&str, &str)],
    ) -> Result<FilePayload> {
        if file_field.is_empty() {
            return Err(Error::validation("fileField is required"));
        }

        let path = format!("{model}/retrieve-file/{pk}/");
        // file-field always comes first, caller params follow in order
        let mut params = vec![("file-field", file_field)];
        params.extend_from_slice(query);

        self.client
            .download_request(&path, &params)
            .await
            .map_err(Into::into)
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    /// Create or update a record.
    ///
    /// Issues `POST /{model}/save/` with the record as the JSON body. The
    /// backend decides create-vs-update from the payload's pk.
    #[instrument(skip(self, record))]
    pub async fn save<T: DeserializeOwned, B: Serialize>(
        &self,
        model: &str,
        record: &B,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let path = format!("{model}/save/");
        let body = serde_json::to_value(record).map_err(modelapi_client::Error::from)?;
        self.client
            .json_request(RequestMethod::Post, &path, Some(body), query)
            .await
            .map_err(Into::into)
    }

    /// Delete a record by pk.
    ///
    /// Issues `DELETE /{model}/delete/{pk}/`. The backend answers 204 with
    /// no body on success.
    #[instrument(skip(self))]
    pub async fn delete(&self, model: &str, pk: u64, query: &[(&str, &str)]) -> Result<()> {
        let path = format!("{model}/delete/{pk}/");
        self.client
            .json_request::<serde_json::Value>(RequestMethod::Delete, &path, None, query)
            .await?;
        Ok(())
    }

    /// Upload a file with its JSON metadata.
    ///
    /// Issues `POST /{model}/save/` as multipart with a `file` part and a
    /// `__json__` metadata part. A missing file short-circuits before any
    /// network call.
    #[instrument(skip(self, file, metadata))]
    pub async fn upload_file<T: DeserializeOwned, M: Serialize>(
        &self,
        model: &str,
        file: Option<FileUpload>,
        metadata: &M,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let Some(file) = file else {
            return Err(Error::validation("file is required"));
        };

        let path = format!("{model}/save/");
        self.client
            .upload_request(&path, file, metadata, query)
            .await
            .map_err(Into::into)
    }

    // =========================================================================
    // Action Execution
    // =========================================================================

    /// Execute a named action against a record.
    ///
    /// Issues `POST /{model}/actions/{action}/{pk}/` with `params` as the
    /// body (empty object when absent). Use pk [`STATIC_PK`] for actions
    /// with no instance context, or call
    /// [`execute_static_action`](ModelRestClient::execute_static_action).
    #[instrument(skip(self, params))]
    pub async fn execute_action<T: DeserializeOwned>(
        &self,
        model: &str,
        action: &str,
        pk: u64,
        params: Option<serde_json::Value>,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        if model.is_empty() {
            return Err(Error::validation("modelClass is required"));
        }
        if action.is_empty() {
            return Err(Error::validation("actionName is required"));
        }

        let path = format!("{model}/actions/{action}/{pk}/");
        let body = params.unwrap_or_else(|| serde_json::json!({}));
        self.client
            .json_request(RequestMethod::Post, &path, Some(body), query)
            .await
            .map_err(Into::into)
    }

    /// Execute a named action with no instance context.
    ///
    /// Identical on the wire to [`execute_action`] with pk `0`.
    ///
    /// [`execute_action`]: ModelRestClient::execute_action
    #[instrument(skip(self, params))]
    pub async fn execute_static_action<T: DeserializeOwned>(
        &self,
        model: &str,
        action: &str,
        params: Option<serde_json::Value>,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        self.execute_action(model, action, STATIC_PK, params, query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> ModelRestClient {
        ModelRestClient::new(server.uri(), "test-token").unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_issues_conventional_get() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/activities/retrieve/1/"))
            .and(header("Authorization", "Token test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Test"}
            ])))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await.unwrap();

        assert_eq!(value, Some(serde_json::json!([{"id": 1, "name": "Test"}])));
    }

    #[tokio::test]
    async fn test_retrieve_is_idempotent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/activities/retrieve/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .expect(2)
            .mount(&server)
            .await;

        let api = client(&server).await;
        let first: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await.unwrap();
        let second: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await.unwrap();

        // No client-side caching: both calls hit the backend and agree
        assert_eq!(first, second);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_list_defaults_to_empty_filter_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/activities/list/"))
            .and(body_json(serde_json::json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1}, {"id": 2}
            ])))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api.list("activities", None, &[]).await.unwrap();

        assert_eq!(value, Some(serde_json::json!([{"id": 1}, {"id": 2}])));
    }

    #[tokio::test]
    async fn test_list_sends_filters_and_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/activities/list/"))
            .and(query_param("page", "2"))
            .and(body_json(serde_json::json!({"status": "OPEN"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api
            .list(
                "activities",
                Some(serde_json::json!({"status": "OPEN"})),
                &[("page", "2")],
            )
            .await
            .unwrap();

        assert_eq!(value, Some(serde_json::json!([])));
    }

    #[tokio::test]
    async fn test_save_posts_record() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/activities/save/"))
            .and(body_json(serde_json::json!({"id": 1, "name": "Renamed"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 1, "name": "Renamed"})),
            )
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api
            .save(
                "activities",
                &serde_json::json!({"id": 1, "name": "Renamed"}),
                &[],
            )
            .await
            .unwrap();

        assert_eq!(value, Some(serde_json::json!({"id": 1, "name": "Renamed"})));
    }

    #[tokio::test]
    async fn test_delete_204_is_ok() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/activities/delete/1/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let api = client(&server).await;
        api.delete("activities", 1, &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_404_surfaces_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/activities/delete/1/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let err = api.delete("activities", 1, &[]).await.unwrap_err();

        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(404));
        let display = err.to_string();
        assert!(display.contains("API Error"), "{display}");
        assert!(display.contains("404"), "{display}");
    }

    #[tokio::test]
    async fn test_retrieve_file_requires_field() {
        let server = MockServer::start().await;

        let api = client(&server).await;
        let err = api
            .retrieve_file("documents", 1, "", &[])
            .await
            .unwrap_err();

        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), "fileField is required");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_retrieve_file_downloads_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/documents/retrieve-file/5/"))
            .and(query_param("file-field", "attachment"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "image/png")
                    .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
            )
            .mount(&server)
            .await;

        let api = client(&server).await;
        let payload = api
            .retrieve_file("documents", 5, "attachment", &[])
            .await
            .unwrap();

        assert_eq!(payload.content_type, "image/png");
        assert_eq!(payload.bytes.as_ref(), &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn test_upload_file_requires_file_and_makes_no_request() {
        let server = MockServer::start().await;

        let api = client(&server).await;
        let err = api
            .upload_file::<serde_json::Value, _>(
                "documents",
                None,
                &serde_json::json!({"origin": "USER_UPLOAD"}),
                &[],
            )
            .await
            .unwrap_err();

        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), "file is required");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_file_posts_to_save_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/documents/save/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 3})))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let file = FileUpload::new(b"file data".to_vec(), "data.txt", "text/plain");
        let value: Option<serde_json::Value> = api
            .upload_file(
                "documents",
                Some(file),
                &serde_json::json!({"origin": "USER_UPLOAD"}),
                &[],
            )
            .await
            .unwrap();

        assert_eq!(value, Some(serde_json::json!({"id": 3})));
    }

    #[tokio::test]
    async fn test_execute_action_validates_arguments() {
        let server = MockServer::start().await;
        let api = client(&server).await;

        let err = api
            .execute_action::<serde_json::Value>("", "run", 1, None, &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "modelClass is required");

        let err = api
            .execute_action::<serde_json::Value>("jobs", "", 1, None, &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "actionName is required");

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_action_posts_params() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/jobs/actions/requeue/42/"))
            .and(body_json(serde_json::json!({"priority": "high"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"queued": true})),
            )
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api
            .execute_action(
                "jobs",
                "requeue",
                42,
                Some(serde_json::json!({"priority": "high"})),
                &[],
            )
            .await
            .unwrap();

        assert_eq!(value, Some(serde_json::json!({"queued": true})));
    }

    #[tokio::test]
    async fn test_static_action_matches_action_with_pk_zero() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/jobs/actions/purge/0/"))
            .and(body_json(serde_json::json!({"older_than": 30})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(2)
            .mount(&server)
            .await;

        let api = client(&server).await;
        let params = serde_json::json!({"older_than": 30});

        let via_static: Option<serde_json::Value> = api
            .execute_static_action("jobs", "purge", Some(params.clone()), &[])
            .await
            .unwrap();
        let via_pk_zero: Option<serde_json::Value> = api
            .execute_action("jobs", "purge", 0, Some(params), &[])
            .await
            .unwrap();

        assert_eq!(via_static, via_pk_zero);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_action_return_204_yields_none() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/jobs/actions/ping/0/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let api = client(&server).await;
        let value: Option<serde_json::Value> = api
            .execute_static_action("jobs", "ping", None, &[])
            .await
            .unwrap();

        assert!(value.is_none());
    }
}
