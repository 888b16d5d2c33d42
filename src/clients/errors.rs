//! HTTP-specific error types for the Constant Contact API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! These errors are opaque to the resource, pagination and bulk job layers:
//! they are passed through to the caller unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use constant_contact::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The parsed response body is kept so callers can inspect the API's own
/// error payload (Constant Contact returns a list of `error_key` /
/// `error_message` objects).
///
/// # Example
///
/// ```rust
/// use constant_contact::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"[{"error_key":"http.status.not_found"}]"#.to_string(),
///     body: serde_json::json!([{"error_key": "http.status.not_found"}]),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error body.
    pub message: String,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A URL template placeholder had no matching parameter.
    #[error("Missing value for '{{{name}}}' in URL template '{template}'.")]
    MissingPathParam {
        /// The placeholder name.
        name: String,
        /// The URL template being rendered.
        template: String,
    },

    /// The call parameters cannot be expressed as a query string.
    #[error("Parameters for {method} requests must be a JSON object.")]
    UnsupportedParams {
        /// The HTTP method of the call.
        method: String,
    },

    /// A URL was expected to start with a `/v<number>/` segment.
    #[error("URL '{url}' does not start with an API version segment.")]
    MissingVersion {
        /// The URL that was provided.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use constant_contact::HttpError;
///
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
