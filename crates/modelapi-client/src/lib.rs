//! # modelapi-client
//!
//! Core HTTP transport for Model API backends.
//!
//! Model API backends expose a fixed URL convention per resource
//! ("model class"):
//!
//! ```text
//! POST   /{model}/list/
//! GET    /{model}/retrieve/{pk}/
//! GET    /{model}/retrieve-file/{pk}/?file-field={field}
//! POST   /{model}/save/
//! DELETE /{model}/delete/{pk}/
//! POST   /{model}/actions/{action}/{pk}/
//! ```
//!
//! This crate provides the transport wrapper underneath that convention:
//! - `Authorization: Token <value>` authentication
//! - Deterministic URL and query-string construction
//! - Outcome classification (2xx / 204 / everything else)
//! - JSON, multipart upload, and buffered download primitives
//!
//! Exactly one network attempt is made per call: no retries, no caching,
//! no timeout surface. Higher layers own those policies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              Operation helpers (modelapi-rest)      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 ModelApiClient                      │
//! │  - Holds base URL + token                           │
//! │  - json_request / upload_request / download_request │
//! │  - URL + query-string construction                  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                   HttpClient                        │
//! │  - Single-attempt HTTP over reqwest                 │
//! │  - Status classification into the error taxonomy    │
//! └─────────────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod error;
mod model_client;
mod request;
mod response;
mod types;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use model_client::ModelApiClient;
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};
pub use types::{FilePayload, FileUpload};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("modelapi/", env!("CARGO_PKG_VERSION"));
