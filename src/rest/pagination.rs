//! Cursor pagination over list endpoints.
//!
//! List responses carry the next page's URL at `meta.pagination.next_link`.
//! [`Paginator::run`] hands each page to a caller-supplied handler, then
//! follows the cursor, until a page arrives without one.
//!
//! Pages are strictly sequential: page N+1 is requested only after the
//! handler for page N has completed successfully. A run ends exactly once:
//!
//! - **finished**: a page had no cursor; the completion hook runs if given
//! - **failed**: a fetch failed (the error hook sees it first), or a
//!   handler returned an error
//!
//! # Example
//!
//! ```rust,ignore
//! use constant_contact::rest::PaginationOptions;
//! use serde_json::json;
//!
//! let contacts = client.resource("contacts").unwrap();
//! let first = contacts.call("list", json!({"limit": 500}));
//!
//! client
//!     .paginate(
//!         first,
//!         |page| async move {
//!             store(page.body["results"].clone()).await
//!         },
//!         PaginationOptions::new()
//!             .on_error(|err| tracing::warn!("crawl aborted: {err}"))
//!             .on_finished(|| async { Ok("all pages stored") }),
//!     )
//!     .await?;
//! ```

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::auth::ClientHandle;
use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::rest::errors::{PaginationError, ResourceError};
use crate::rest::path::split_versioned_url;

type ErrorHook<'a> = Box<dyn FnOnce(&ResourceError) + Send + 'a>;
type FinishedHook<'a, R, E> = Box<dyn FnOnce() -> BoxFuture<'a, Result<R, E>> + Send + 'a>;

/// Optional hooks and limits for a pagination run.
///
/// `R` is the value produced by the completion hook. A fresh
/// `PaginationOptions::new()` has no completion hook and `R = ()`.
pub struct PaginationOptions<'a, R, E> {
    on_error: Option<ErrorHook<'a>>,
    on_finished: Option<FinishedHook<'a, R, E>>,
    max_pages: Option<usize>,
}

impl<'a, E> PaginationOptions<'a, (), E> {
    /// Creates options with no hooks and no page limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_error: None,
            on_finished: None,
            max_pages: None,
        }
    }
}

impl<'a, E> Default for PaginationOptions<'a, (), E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R, E> PaginationOptions<'a, R, E> {
    /// Sets a hook called with the error when a page cannot be fetched.
    ///
    /// The hook is advisory: the run still fails with the same error.
    /// It is not called for handler failures.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&ResourceError) + Send + 'a,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Sets a hook awaited once after the last page has been handled.
    ///
    /// Its output becomes the run's result.
    #[must_use]
    pub fn on_finished<R2, F, Fut>(self, hook: F) -> PaginationOptions<'a, R2, E>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<R2, E>> + Send + 'a,
    {
        PaginationOptions {
            on_error: self.on_error,
            on_finished: Some(Box::new(move || hook().boxed())),
            max_pages: self.max_pages,
        }
    }

    /// Stops the run once `max_pages` pages have been handled and a
    /// cursor still remains. Unbounded by default.
    ///
    /// The first page is always handled, so `0` behaves like `1`.
    #[must_use]
    pub const fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(if max_pages == 0 { 1 } else { max_pages });
        self
    }
}

impl<R, E> std::fmt::Debug for PaginationOptions<'_, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationOptions")
            .field("on_error", &self.on_error.is_some())
            .field("on_finished", &self.on_finished.is_some())
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

/// Drives pagination runs using an authenticated client handle.
#[derive(Clone, Debug)]
pub struct Paginator {
    handle: ClientHandle,
}

impl Paginator {
    /// Creates a paginator that follows cursors with `handle`.
    #[must_use]
    pub const fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    /// Fetches the page a cursor points at.
    ///
    /// The cursor's version segment is removed from the path and sent as
    /// the request's version option.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the cursor has no version
    /// segment, or any transport error.
    pub async fn follow(&self, next_link: &str) -> Result<HttpResponse, HttpError> {
        let request = follow_request(next_link)?;
        self.handle.client().request(request).await
    }

    /// Runs pagination starting from a pending first page.
    ///
    /// `first` is typically an unawaited resource call. `on_page` receives
    /// each page in order; the next page is fetched only after its future
    /// resolves to `Ok`.
    ///
    /// Returns `Ok(Some(r))` with the completion hook's output, or
    /// `Ok(None)` when no completion hook was set.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::Request`] if a page could not be fetched
    /// - [`PaginationError::Handler`] if `on_page` or the completion hook failed
    /// - [`PaginationError::PageLimitExceeded`] if the page limit was reached
    pub async fn run<F, Fe, P, PFut, R, E>(
        &self,
        first: F,
        mut on_page: P,
        options: PaginationOptions<'_, R, E>,
    ) -> Result<Option<R>, PaginationError<E>>
    where
        F: Future<Output = Result<HttpResponse, Fe>>,
        Fe: Into<ResourceError>,
        P: FnMut(HttpResponse) -> PFut,
        PFut: Future<Output = Result<(), E>>,
    {
        let PaginationOptions {
            mut on_error,
            on_finished,
            max_pages,
        } = options;

        let mut pending: Result<HttpResponse, ResourceError> = first.await.map_err(Into::into);
        let mut handled = 0usize;

        loop {
            let page = match pending {
                Ok(page) => page,
                Err(err) => {
                    tracing::debug!("Caught an error - exiting early");
                    if let Some(hook) = on_error.take() {
                        hook(&err);
                    }
                    return Err(PaginationError::Request(err));
                }
            };

            let next = page.next_link().map(str::to_owned);

            if let Err(err) = on_page(page).await {
                tracing::debug!("Caught a handling error - exiting early");
                return Err(PaginationError::Handler(err));
            }
            handled += 1;

            let Some(next) = next else {
                tracing::debug!("Pagination finished after {} pages", handled);
                return match on_finished {
                    Some(hook) => hook().await.map(Some).map_err(PaginationError::Handler),
                    None => Ok(None),
                };
            };

            if let Some(max_pages) = max_pages {
                if handled >= max_pages {
                    tracing::debug!("Page limit of {} reached", max_pages);
                    return Err(PaginationError::PageLimitExceeded { max_pages });
                }
            }

            tracing::debug!("Following pagination link: {}", next);
            pending = self.follow(&next).await.map_err(ResourceError::from);
        }
    }
}

/// Builds the GET request for a pagination cursor.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::MissingVersion`](crate::clients::InvalidHttpRequestError::MissingVersion)
/// if the cursor has no `/v<number>/` segment.
///
/// # Example
///
/// ```rust
/// use constant_contact::rest::follow_request;
/// use constant_contact::{ApiVersion, HttpMethod};
///
/// let request = follow_request("/v3/contacts?cursor=abc").unwrap();
/// assert_eq!(request.http_method, HttpMethod::Get);
/// assert_eq!(request.path, "contacts?cursor=abc");
/// assert_eq!(request.version, Some(ApiVersion::V3));
/// ```
pub fn follow_request(next_link: &str) -> Result<HttpRequest, HttpError> {
    let (version, path) = split_versioned_url(next_link)?;
    Ok(HttpRequest::builder(HttpMethod::Get, path)
        .version(version)
        .build()?)
}

/// Returns the items of a list page.
///
/// v2 list endpoints wrap items in `results`; endpoints that return a bare
/// array are returned as-is.
#[must_use]
pub fn page_results(page: &HttpResponse) -> &[Value] {
    page.body
        .get("results")
        .unwrap_or(&page.body)
        .as_array()
        .map_or(&[], Vec::as_slice)
}
