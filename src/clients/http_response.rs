//! HTTP response types for the Constant Contact API client.
//!
//! This module provides the [`HttpResponse`] type for accessing response
//! data and the pagination metadata carried by list endpoints.

use std::collections::HashMap;

/// A parsed HTTP response from the API.
///
/// List endpoints embed pagination state in the body:
///
/// ```json
/// {
///   "meta": { "pagination": { "next_link": "/v2/contacts?next=c3RhcnRBdD0z" } },
///   "results": [ ... ]
/// }
/// ```
///
/// # Example
///
/// ```rust
/// use constant_contact::HttpResponse;
/// use std::collections::HashMap;
///
/// let body = serde_json::json!({
///     "meta": {"pagination": {"next_link": "/v2/contacts?next=abc"}},
///     "results": []
/// });
/// let response = HttpResponse::new(200, HashMap::new(), body);
///
/// assert!(response.is_ok());
/// assert_eq!(response.next_link(), Some("/v2/contacts?next=abc"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body (empty object for empty bodies).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the pagination cursor at `meta.pagination.next_link`.
    ///
    /// Returns `None` when the field is absent, `null`, not a string, or empty.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.body
            .pointer("/meta/pagination/next_link")
            .and_then(serde_json::Value::as_str)
            .filter(|link| !link.is_empty())
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
