//! # modelapi
//!
//! A client library for Model API backends: REST services exposing the
//! fixed `/{model}/list/`, `/{model}/retrieve/{pk}/`, `/{model}/save/`,
//! `/{model}/delete/{pk}/`, `/{model}/actions/{action}/{pk}/`, and
//! `/{model}/retrieve-file/{pk}/` convention with
//! `Authorization: Token <value>` authentication.
//!
//! ## Crates
//!
//! - **modelapi-client** - Transport wrapper: URL construction, token auth,
//!   outcome classification, JSON/multipart/download primitives
//! - **modelapi-rest** - Operation helpers: list, retrieve, save, delete,
//!   file transfer, action execution
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use modelapi::ModelRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ModelRestClient::new("https://api.example.com", "token")?;
//!
//!     // List open activities
//!     let activities: Option<serde_json::Value> = api
//!         .list("activities", Some(serde_json::json!({"status": "OPEN"})), &[])
//!         .await?;
//!
//!     // Retrieve one
//!     let activity: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await?;
//!
//!     // Run a static action
//!     let report: Option<serde_json::Value> = api
//!         .execute_static_action("activities", "summarize", None, &[])
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use modelapi_client as client;
#[cfg(feature = "rest")]
pub use modelapi_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use modelapi_client::{ClientConfig, FilePayload, FileUpload, ModelApiClient};
#[cfg(feature = "rest")]
pub use modelapi_rest::ModelRestClient;
