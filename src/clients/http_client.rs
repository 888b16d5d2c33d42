//! HTTP client for Constant Contact API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the API.

use std::collections::HashMap;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, ConstantContactConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Constant Contact API.
///
/// An `HttpClient` carries one snapshot of the credentials. Instances are
/// cheap to build (the underlying connection pool is shared) and are
/// normally obtained per call from
/// [`ClientHandle::client`](crate::auth::ClientHandle::client) so that
/// credential changes are picked up.
///
/// The client handles:
/// - URL construction from base URL, version segment and path
/// - Default headers including User-Agent and the bearer token
/// - The `api_key` query parameter
/// - JSON body parsing and non-2xx error mapping
///
/// No retries are performed.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The shared reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.constantcontact.com`).
    base_uri: String,
    /// Version segment used when a request does not carry its own.
    api_version: ApiVersion,
    /// API key sent as the `api_key` query parameter.
    api_key: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticated with `credentials`.
    ///
    /// # Arguments
    ///
    /// * `client` - The reqwest client whose connection pool is used
    /// * `config` - Configuration providing base URL, default version and user agent prefix
    /// * `credentials` - The API key and access token to authenticate with
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        config: &ConstantContactConfig,
        credentials: &Credentials,
    ) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Constant Contact API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", credentials.access_token().as_ref()),
        );

        Self {
            client,
            base_uri: config.base_url().as_ref().to_string(),
            api_version: config.api_version(),
            api_key: credentials.api_key().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default API version for this client.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "contacts?next=abc")
    ///     .version(ApiVersion::V3)
    ///     .build()?;
    /// assert_eq!(client.url_for(&request), "https://api.constantcontact.com/v3/contacts?next=abc");
    /// ```
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let version = request.version.unwrap_or(self.api_version);
        format!(
            "{}/{}/{}",
            self.base_uri,
            version,
            request.path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs, including a response body that cannot be
    ///   read to the end (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        tracing::debug!("{} {}", request.http_method, url);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        req_builder = req_builder.query(&[("api_key", self.api_key.as_str())]);
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.body.to_string(),
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
