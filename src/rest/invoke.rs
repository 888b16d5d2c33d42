//! The request invoker: turns an action call into one HTTP request.
//!
//! The parameter bag for a call is a JSON object. Placeholders in the URL
//! template are filled from it first; whatever remains becomes the query
//! string for `GET`/`DELETE` or the JSON body for `POST`/`PUT`.
//!
//! ```rust
//! use constant_contact::rest::build_request;
//! use constant_contact::{ApiVersion, HttpMethod};
//! use serde_json::json;
//!
//! let request = build_request(
//!     HttpMethod::Get,
//!     "/v2/lists/{id}/contacts",
//!     json!({"id": 7, "limit": 50}),
//! )
//! .unwrap();
//!
//! assert_eq!(request.path, "lists/7/contacts");
//! assert_eq!(request.version, Some(ApiVersion::V2));
//! assert_eq!(request.query.unwrap()["limit"], "50");
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::auth::ClientHandle;
use crate::clients::{
    HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
};
use crate::config::ApiVersion;
use crate::rest::path::{param_to_string, render_template};

/// Builds the request for one call without sending it.
///
/// Templates without a leading version segment are sent with the client's
/// default version.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError`] if a template placeholder has no value,
/// or if `params` is neither an object nor `null` for a `GET`/`DELETE` call.
/// Non-object params for `POST`/`PUT` are sent as the body as-is.
pub fn build_request(
    method: HttpMethod,
    url: &str,
    params: Value,
) -> Result<HttpRequest, InvalidHttpRequestError> {
    let (mut bag, raw_body) = match params {
        Value::Object(map) => (map, None),
        Value::Null => (Map::new(), None),
        other if method.has_body() => (Map::new(), Some(other)),
        _ => {
            return Err(InvalidHttpRequestError::UnsupportedParams {
                method: method.to_string(),
            })
        }
    };

    let rendered = render_template(url, &mut bag)?;

    let (version, path) = match ApiVersion::split_path(&rendered) {
        Some((version, rest)) => (Some(version), rest.to_string()),
        None => (None, rendered.trim_start_matches('/').to_string()),
    };

    let mut builder = HttpRequest::builder(method, path);
    if let Some(version) = version {
        builder = builder.version(version);
    }

    if method.has_body() {
        builder = builder.body(raw_body.unwrap_or(Value::Object(bag)));
    } else if !bag.is_empty() {
        let query: HashMap<String, String> = bag
            .iter()
            .map(|(key, value)| (key.clone(), param_to_string(value)))
            .collect();
        builder = builder.query(query);
    }

    builder.build()
}

/// Executes one call through a freshly authenticated client.
///
/// HTTP failures are returned unchanged. No retries are performed.
///
/// # Errors
///
/// Returns [`HttpError::InvalidRequest`] if the request cannot be built, and
/// any transport error from [`HttpClient::request`](crate::clients::HttpClient::request).
pub async fn invoke(
    handle: &ClientHandle,
    method: HttpMethod,
    url: &str,
    params: Value,
) -> Result<HttpResponse, HttpError> {
    let request = build_request(method, url, params)?;
    handle.client().request(request).await
}
