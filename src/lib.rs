//! # Constant Contact API Rust Client
//!
//! A Rust client for the Constant Contact marketing API, providing validated
//! configuration, a resource tree generated from an action catalog, cursor
//! pagination and bulk job polling.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConstantContactConfig`] and [`ConstantContactConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - A resource tree with one callable node per catalog path (see [`rest`])
//! - Cursor pagination following `meta.pagination.next_link`
//! - Polling of bulk activities until they complete or fail
//! - Access token rotation without rebuilding the client
//!
//! ## Quick Start
//!
//! ```rust
//! use constant_contact::{ConstantContact, ConstantContactConfig, ApiKey, AccessToken, ApiVersion};
//!
//! let config = ConstantContactConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//!
//! let client = ConstantContact::new(config).unwrap();
//! assert!(client.resource("contacts").unwrap().has_action("list"));
//! ```
//!
//! ## Calling Resources
//!
//! Every catalog path becomes a node in the resource tree. Parameters are a
//! JSON object: URL placeholders are filled from it, and the rest becomes the
//! query string or the request body.
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let contact = client.call("contacts", "get", json!({"id": 42})).await?;
//!
//! let schedules = client.resource("campaigns.schedules").unwrap();
//! schedules
//!     .call("create", json!({"campaign_id": "1100", "scheduled_date": "2026-11-01T10:00:00Z"}))
//!     .await?;
//! ```
//!
//! ## Pagination
//!
//! ```rust,ignore
//! use constant_contact::rest::{page_results, PaginationOptions};
//!
//! let first = client.call("contacts", "list", json!({"limit": 500}));
//! let total = client
//!     .paginate(
//!         first,
//!         |page| async move {
//!             save(page_results(&page)).await
//!         },
//!         PaginationOptions::new()
//!             .on_error(|err| tracing::error!("Export stopped: {err}"))
//!             .on_finished(|| async { Ok("export complete") }),
//!     )
//!     .await?;
//! ```
//!
//! ## Bulk Jobs
//!
//! ```rust,ignore
//! use constant_contact::rest::BulkWaitOptions;
//! use std::time::Duration;
//!
//! let activity = client
//!     .call("bulk.activities.export_contacts", "create", json!({"lists": ["1"]}))
//!     .await?;
//! let id = activity.body["id"].as_str().unwrap_or_default();
//!
//! let finished = client
//!     .wait_for_bulk_job_with(
//!         id,
//!         BulkWaitOptions::new().interval(Duration::from_secs(5)).max_polls(120),
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Transparent errors**: HTTP failures reach the caller unchanged

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::ConstantContact;

// Re-export public types at crate root for convenience
pub use auth::{ClientHandle, Credentials};
pub use config::{
    AccessToken, ApiKey, ApiVersion, BaseUrl, ConstantContactConfig, ConstantContactConfigBuilder,
};
pub use error::{ConfigError, Error};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource layer types
pub use rest::{
    ActionCatalog, ActionSpec, BulkJobError, BulkJobStatus, BulkWaitOptions, CatalogError,
    PaginationError, PaginationOptions, ResourceError, ResourceNode, ResourceTree,
};
