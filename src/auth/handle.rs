//! The authenticated client handle shared by every resource.

use std::sync::{Arc, PoisonError, RwLock};

use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpError};
use crate::config::{AccessToken, ConstantContactConfig};

/// Produces an [`HttpClient`] carrying the current credentials.
///
/// The handle is cheap to clone; all clones share one connection pool and
/// one credential slot. [`client`](Self::client) reads the credentials on
/// every call and never caches the result, so a token replaced through
/// [`set_access_token`](Self::set_access_token) is used by the next request.
///
/// # Thread Safety
///
/// `ClientHandle` is `Send + Sync`. Concurrent calls only take a read lock.
///
/// # Example
///
/// ```rust
/// use constant_contact::{AccessToken, ConstantContactConfig};
/// use constant_contact::auth::ClientHandle;
///
/// let config = ConstantContactConfig::new("key", "token").unwrap();
/// let handle = ClientHandle::new(config).unwrap();
///
/// handle.set_access_token(AccessToken::new("new-token").unwrap());
/// assert_eq!(
///     handle.client().default_headers().get("Authorization"),
///     Some(&"Bearer new-token".to_string())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ClientHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug)]
struct HandleInner {
    http: reqwest::Client,
    config: ConstantContactConfig,
    credentials: RwLock<Credentials>,
}

// Verify ClientHandle is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientHandle>();
};

impl ClientHandle {
    /// Creates a handle from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: ConstantContactConfig) -> Result<Self, HttpError> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;
        let credentials = Credentials::from_config(&config);

        Ok(Self {
            inner: Arc::new(HandleInner {
                http,
                config,
                credentials: RwLock::new(credentials),
            }),
        })
    }

    /// Returns the configuration the handle was created with.
    #[must_use]
    pub fn config(&self) -> &ConstantContactConfig {
        &self.inner.config
    }

    /// Returns a copy of the current credentials.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.inner
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token used by subsequent calls.
    ///
    /// Requests already in flight keep the token they were built with.
    pub fn set_access_token(&self, access_token: AccessToken) {
        tracing::debug!("Access token replaced");
        self.inner
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_access_token(access_token);
    }

    /// Builds an HTTP client authenticated with the current credentials.
    #[must_use]
    pub fn client(&self) -> HttpClient {
        let credentials = self.credentials();
        HttpClient::new(self.inner.http.clone(), &self.inner.config, &credentials)
    }
}
