//! URL template rendering and version segment handling.
//!
//! Catalog URLs are templates such as `/v2/contacts/{id}`. Rendering
//! substitutes each `{name}` placeholder from the call's parameter bag,
//! consuming the parameter so it is not sent again as query or body.
//!
//! Both catalog URLs and pagination cursors carry a leading `/v<number>/`
//! segment. The transport wants the version as a separate option, so
//! [`split_versioned_url`] separates the two.
//!
//! # Example
//!
//! ```rust
//! use constant_contact::rest::{render_template, split_versioned_url};
//! use constant_contact::ApiVersion;
//! use serde_json::{json, Map, Value};
//!
//! let mut params: Map<String, Value> = json!({"id": 42, "status": "ACTIVE"})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//! let url = render_template("/v2/contacts/{id}", &mut params).unwrap();
//! assert_eq!(url, "/v2/contacts/42");
//! assert!(!params.contains_key("id"));
//!
//! let (version, path) = split_versioned_url("/v3/contacts?cursor=abc").unwrap();
//! assert_eq!(version, ApiVersion::V3);
//! assert_eq!(path, "contacts?cursor=abc");
//! ```

use reqwest::Url;
use serde_json::{Map, Value};

use crate::clients::InvalidHttpRequestError;
use crate::config::ApiVersion;

/// Renders a URL template, consuming the parameters it uses.
///
/// Values are percent-encoded. Strings are used as-is, numbers and booleans
/// in their JSON form.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::MissingPathParam`] if a placeholder
/// has no value, or a `null` value, in `params`.
pub fn render_template(
    template: &str,
    params: &mut Map<String, Value>,
) -> Result<String, InvalidHttpRequestError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];

        let value = params
            .remove(name)
            .filter(|value| !value.is_null())
            .ok_or_else(|| InvalidHttpRequestError::MissingPathParam {
                name: name.to_string(),
                template: template.to_string(),
            })?;

        rendered.push_str(&rest[..start]);
        rendered.push_str(&urlencoding::encode(&param_to_string(&value)));
        rest = &rest[start + len + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Formats a parameter value for use in a URL.
///
/// Arrays are joined with commas, which is how the API accepts multi-valued
/// filters such as `status=ACTIVE,UNCONFIRMED`.
#[must_use]
pub fn param_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(param_to_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Origin that relative cursors are resolved against before parsing.
const RELATIVE_BASE: &str = "http://localhost";

/// Splits an API URL into its version segment and the versionless remainder.
///
/// Absolute URLs are reduced to their path and query first; relative URLs
/// must start with `/`. The remainder has no leading slash.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::MissingVersion`] if the path does not
/// start with `/v<number>/`.
pub fn split_versioned_url(url: &str) -> Result<(ApiVersion, String), InvalidHttpRequestError> {
    let missing = || InvalidHttpRequestError::MissingVersion {
        url: url.to_string(),
    };

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) if url.starts_with('/') => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(url))
            .map_err(|_| missing())?,
        Err(_) => return Err(missing()),
    };

    let (version, rest) = ApiVersion::split_path(parsed.path()).ok_or_else(missing)?;
    let remainder = match parsed.query() {
        Some(query) => format!("{rest}?{query}"),
        None => rest.to_string(),
    };

    Ok((version, remainder))
}
