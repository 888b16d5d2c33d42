//! The root client object.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::auth::ClientHandle;
use crate::clients::HttpResponse;
use crate::config::{AccessToken, ConstantContactConfig};
use crate::error::Error;
use crate::rest::{
    wait_for, ActionCatalog, BulkJobError, BulkWaitOptions, PaginationError, PaginationOptions,
    Paginator, ResourceError, ResourceNode, ResourceTree,
};

/// Client for the Constant Contact API.
///
/// Construction validates the credentials and builds the full resource tree
/// from the action catalog once. The tree never changes afterwards; every
/// clone shares it along with the authenticated handle.
///
/// # Thread Safety
///
/// `ConstantContact` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,ignore
/// use constant_contact::ConstantContact;
/// use serde_json::json;
///
/// let client = ConstantContact::from_credentials("api-key", "access-token")?;
///
/// let info = client.call("account.info", "get", json!({})).await?;
/// println!("Organization: {}", info.body["organization_name"]);
///
/// let activity = client
///     .call(
///         "bulk.activities.clear_lists",
///         "create",
///         json!({"lists": ["1"]}),
///     )
///     .await?;
/// let id = activity.body["id"].as_str().unwrap();
/// let done = client.wait_for_bulk_job(id).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ConstantContact {
    handle: ClientHandle,
    resources: Arc<ResourceTree>,
}

// Verify ConstantContact is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConstantContact>();
};

impl ConstantContact {
    /// Creates a client using the built-in action catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the built-in catalog cannot be loaded, or
    /// [`Error::Http`] if the HTTP client cannot be created.
    pub fn new(config: ConstantContactConfig) -> Result<Self, Error> {
        let catalog = ActionCatalog::builtin()?;
        Self::with_catalog(config, &catalog)
    }

    /// Creates a client whose resources come from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be created.
    pub fn with_catalog(config: ConstantContactConfig, catalog: &ActionCatalog) -> Result<Self, Error> {
        let handle = ClientHandle::new(config)?;
        tracing::debug!("Building resources for {} catalog entries", catalog.len());
        let resources = ResourceTree::build(catalog, &handle);

        Ok(Self {
            handle,
            resources: Arc::new(resources),
        })
    }

    /// Creates a client from raw credentials with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either credential is empty, or any error
    /// from [`new`](Self::new).
    pub fn from_credentials(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(ConstantContactConfig::new(api_key, access_token)?)
    }

    /// Returns the authenticated client handle.
    #[must_use]
    pub const fn handle(&self) -> &ClientHandle {
        &self.handle
    }

    /// Returns the root of the resource tree.
    #[must_use]
    pub fn resources(&self) -> &ResourceTree {
        &self.resources
    }

    /// Returns the resource at a dotted path.
    #[must_use]
    pub fn resource(&self, path: &str) -> Option<&ResourceNode> {
        self.resources.resource(path)
    }

    /// Calls `action` on the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownResource`] for an unknown path, or any
    /// error from [`ResourceNode::call`].
    pub async fn call(
        &self,
        path: &str,
        action: &str,
        params: Value,
    ) -> Result<HttpResponse, ResourceError> {
        let node = self
            .resource(path)
            .ok_or_else(|| ResourceError::UnknownResource {
                path: path.to_string(),
            })?;
        node.call(action, params).await
    }

    /// Replaces the access token used by all subsequent calls.
    pub fn set_access_token(&self, access_token: AccessToken) {
        self.handle.set_access_token(access_token);
    }

    /// Walks every page of a list endpoint.
    ///
    /// See [`Paginator::run`] for the run's semantics.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] if a page cannot be fetched, a handler
    /// fails, or the page limit is reached.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use constant_contact::rest::{page_results, PaginationOptions};
    /// use serde_json::json;
    ///
    /// let first = client.call("contacts", "list", json!({"limit": 500}));
    /// client
    ///     .paginate(
    ///         first,
    ///         |page| async move {
    ///             println!("{} contacts", page_results(&page).len());
    ///             Ok::<(), std::io::Error>(())
    ///         },
    ///         PaginationOptions::new(),
    ///     )
    ///     .await?;
    /// ```
    pub async fn paginate<F, Fe, P, PFut, R, E>(
        &self,
        first: F,
        on_page: P,
        options: PaginationOptions<'_, R, E>,
    ) -> Result<Option<R>, PaginationError<E>>
    where
        F: Future<Output = Result<HttpResponse, Fe>>,
        Fe: Into<ResourceError>,
        P: FnMut(HttpResponse) -> PFut,
        PFut: Future<Output = Result<(), E>>,
    {
        Paginator::new(self.handle.clone())
            .run(first, on_page, options)
            .await
    }

    /// Waits for a bulk activity, sampling its status every two seconds.
    ///
    /// # Errors
    ///
    /// See [`wait_for`].
    pub async fn wait_for_bulk_job(&self, id: &str) -> Result<HttpResponse, BulkJobError> {
        self.wait_for_bulk_job_with(id, BulkWaitOptions::default())
            .await
    }

    /// Waits for a bulk activity with custom sampling options.
    ///
    /// # Errors
    ///
    /// See [`wait_for`].
    pub async fn wait_for_bulk_job_with(
        &self,
        id: &str,
        options: BulkWaitOptions,
    ) -> Result<HttpResponse, BulkJobError> {
        wait_for(&self.resources, id, options).await
    }
}
