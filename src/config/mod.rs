//! Configuration types for the Constant Contact API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ConstantContactConfig`]: The configuration struct holding all client settings
//! - [`ConstantContactConfigBuilder`]: A builder for constructing [`ConstantContactConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`BaseUrl`]: A validated API host URL
//! - [`ApiVersion`]: The default API version segment
//!
//! # Example
//!
//! ```rust
//! use constant_contact::{ConstantContactConfig, ApiKey, AccessToken, ApiVersion};
//!
//! let config = ConstantContactConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, BaseUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Constant Contact API client.
///
/// Holds the credentials used to authenticate every call along with the
/// API host and default version.
///
/// # Example
///
/// ```rust
/// use constant_contact::{ConstantContactConfig, ApiKey, AccessToken};
///
/// let config = ConstantContactConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.constantcontact.com");
/// ```
#[derive(Clone, Debug)]
pub struct ConstantContactConfig {
    api_key: ApiKey,
    access_token: AccessToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl ConstantContactConfig {
    /// Creates a new builder for constructing a `ConstantContactConfig`.
    #[must_use]
    pub fn builder() -> ConstantContactConfigBuilder {
        ConstantContactConfigBuilder::new()
    }

    /// Creates a configuration from raw credential strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyAccessToken`]
    /// if either credential is empty.
    pub fn new(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .api_key(ApiKey::new(api_key)?)
            .access_token(AccessToken::new(access_token)?)
            .build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version used for paths without a version segment.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ConstantContactConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConstantContactConfig>();
};

/// Builder for constructing [`ConstantContactConfig`] instances.
///
/// Required fields are `api_key` and `access_token`.
///
/// # Defaults
///
/// - `base_url`: `https://api.constantcontact.com`
/// - `api_version`: `v2`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConstantContactConfigBuilder {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ConstantContactConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ConstantContactConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<ConstantContactConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ConstantContactConfig {
            api_key,
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
