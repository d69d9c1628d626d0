//! # modelapi-rest
//!
//! Operation helpers for Model API backends.
//!
//! One typed method per verb of the backend convention:
//!
//! - **list** — `POST /{model}/list/` with optional filters
//! - **retrieve** — `GET /{model}/retrieve/{pk}/`
//! - **retrieve_file** — `GET /{model}/retrieve-file/{pk}/?file-field={field}`
//! - **save** — `POST /{model}/save/`
//! - **delete** — `DELETE /{model}/delete/{pk}/`
//! - **upload_file** — `POST /{model}/save/` as multipart (`file` + `__json__`)
//! - **execute_action** / **execute_static_action** —
//!   `POST /{model}/actions/{action}/{pk}/` (pk `0` for static context)
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelapi_rest::ModelRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), modelapi_rest::Error> {
//!     let api = ModelRestClient::new("https://api.example.com", "token")?;
//!
//!     let open: Option<serde_json::Value> = api
//!         .list("activities", Some(serde_json::json!({"status": "OPEN"})), &[])
//!         .await?;
//!
//!     let one: Option<serde_json::Value> = api.retrieve("activities", 1, &[]).await?;
//!
//!     api.delete("activities", 1, &[]).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ModelRestClient, STATIC_PK};
pub use error::{Error, ErrorKind, Result};

// Re-export modelapi-client types that callers need at this layer
pub use modelapi_client::{ClientConfig, ClientConfigBuilder, FilePayload, FileUpload};
