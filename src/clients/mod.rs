//! HTTP client types for Constant Contact API communication.
//!
//! This module provides the transport layer: authenticated requests with a
//! version segment spliced into the path, and response parsing.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use constant_contact::clients::{HttpRequest, HttpMethod};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "contacts")
//!     .query_param("limit", "50")
//!     .build()
//!     .unwrap();
//!
//! let response = handle.client().request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client never retries. Transient failures are returned to the caller,
//! which owns any retry policy.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
