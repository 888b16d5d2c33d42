//! Error types for the Constant Contact API client.
//!
//! This module contains the configuration error type along with a crate-level
//! [`enum@Error`] that unifies the non-generic errors produced by the client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use constant_contact::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::{BulkJobError, CatalogError, ResourceError};

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("Missing config.apiKey: the API key cannot be empty.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Missing config.accessToken: the access token cannot be empty.")]
    EmptyAccessToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v<number>' (e.g., 'v2').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.constantcontact.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for the client.
///
/// Wraps every non-generic error the crate produces so callers can use a
/// single error type with `?`. Pagination errors are generic over the page
/// handler's error and are therefore not included.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The action catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A resource lookup or call failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// An HTTP request failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A bulk job failed or could not be observed.
    #[error(transparent)]
    BulkJob(#[from] BulkJobError),
}
