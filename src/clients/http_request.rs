//! HTTP request types for the Constant Contact API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the API.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::ApiVersion;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods supported by the API.
///
/// Catalog files spell methods in upper case (`"GET"`, `"POST"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters for this method travel in the request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// `path` is relative to the versioned base (`contacts/123`, optionally with
/// a query string). The version segment is carried in `version` and spliced
/// into the URL by the client; `None` means the client's default version.
///
/// # Example
///
/// ```rust
/// use constant_contact::clients::{HttpRequest, HttpMethod};
/// use constant_contact::ApiVersion;
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "contacts")
///     .query_param("limit", "50")
///     .version(ApiVersion::V2)
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "lists")
///     .body(json!({"name": "Newsletter"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the versioned base) for this request.
    pub path: String,
    /// The API version segment, if overriding the client default.
    pub version: Option<ApiVersion>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.has_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    version: Option<ApiVersion>,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            version: None,
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the API version segment for this request.
    #[must_use]
    pub const fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// Requests with a body get `Content-Type: application/json` unless a
    /// content type was set with [`header`](Self::header).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(mut self) -> Result<HttpRequest, InvalidHttpRequestError> {
        if self.body.is_some() {
            let headers = self.extra_headers.get_or_insert_with(HashMap::new);
            if !headers.keys().any(|key| key.eq_ignore_ascii_case(CONTENT_TYPE)) {
                headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
            }
        }

        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            version: self.version,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_deserializes_upper_case() {
        let method: HttpMethod = serde_json::from_value(json!("DELETE")).unwrap();
        assert_eq!(method, HttpMethod::Delete);
        assert!(serde_json::from_value::<HttpMethod>(json!("PATCH")).is_err());
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "contacts")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "contacts");
        assert!(request.version.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_builder_sets_version() {
        let request = HttpRequest::builder(HttpMethod::Get, "contacts?next=abc")
            .version(ApiVersion::V3)
            .build()
            .unwrap();

        assert_eq!(request.version, Some(ApiVersion::V3));
        assert_eq!(request.path, "contacts?next=abc");
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "lists").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_builder_with_query_params_and_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "contacts")
            .query_param("limit", "50")
            .query_param("status", "ACTIVE")
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("status"), Some(&"ACTIVE".to_string()));
        assert_eq!(
            request.extra_headers.unwrap().get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_body_requests_get_json_content_type() {
        let request = HttpRequest::builder(HttpMethod::Post, "lists")
            .body(json!({"name": "Newsletter"}))
            .build()
            .unwrap();
        assert_eq!(
            request.extra_headers.unwrap().get("Content-Type"),
            Some(&"application/json".to_string())
        );

        let request = HttpRequest::builder(HttpMethod::Get, "lists")
            .build()
            .unwrap();
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_explicit_content_type_is_kept() {
        let request = HttpRequest::builder(HttpMethod::Put, "lists/1")
            .header("content-type", "application/merge-patch+json")
            .body(json!({"name": "Renamed"}))
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/merge-patch+json".to_string())
        );
    }
}
