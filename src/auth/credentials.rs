//! Credentials used to authenticate API calls.

use crate::config::{AccessToken, ApiKey, ConstantContactConfig};

/// The API key and access token attached to every request.
///
/// The access token is sent as a bearer token and the API key as the
/// `api_key` query parameter. `Debug` output masks the token.
///
/// # Example
///
/// ```rust
/// use constant_contact::{AccessToken, ApiKey};
/// use constant_contact::auth::Credentials;
///
/// let credentials = Credentials::new(
///     ApiKey::new("key").unwrap(),
///     AccessToken::new("token").unwrap(),
/// );
/// assert_eq!(credentials.api_key().as_ref(), "key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
    access_token: AccessToken,
}

impl Credentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(api_key: ApiKey, access_token: AccessToken) -> Self {
        Self {
            api_key,
            access_token,
        }
    }

    /// Copies the credentials out of a configuration.
    #[must_use]
    pub fn from_config(config: &ConstantContactConfig) -> Self {
        Self::new(config.api_key().clone(), config.access_token().clone())
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

    /// Replaces the access token, keeping the API key.
    pub fn set_access_token(&mut self, access_token: AccessToken) {
        self.access_token = access_token;
    }
}
