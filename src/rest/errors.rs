//! Error types for catalog loading, resource calls, pagination and bulk jobs.
//!
//! - [`CatalogError`]: The action catalog is malformed
//! - [`ResourceError`]: A resource path or action does not exist, or its
//!   HTTP call failed
//! - [`PaginationError`]: A pagination run ended in failure
//! - [`BulkJobError`]: A bulk job failed or could not be observed
//!
//! HTTP failures are never reinterpreted: they are carried unchanged inside
//! [`ResourceError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use constant_contact::rest::{ResourceError, BulkJobError};
//!
//! match client.wait_for_bulk_job("a07e1ilbm7shdg6ikeo").await {
//!     Ok(job) => println!("Done: {}", job.body),
//!     Err(BulkJobError::Failed { response }) => {
//!         println!("Job failed: {}", response.body);
//!     }
//!     Err(BulkJobError::Request(ResourceError::Http(e))) => {
//!         println!("Could not poll: {}", e);
//!     }
//!     Err(other) => println!("{}", other),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};

/// Error returned when an action catalog cannot be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("Invalid action catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A dotted path is empty or contains an empty segment.
    #[error("Invalid resource path '{path}': path segments cannot be empty.")]
    EmptySegment {
        /// The offending path.
        path: String,
    },

    /// A path appears twice in the catalog.
    #[error("Resource path '{path}' is defined more than once.")]
    DuplicatePath {
        /// The duplicated path.
        path: String,
    },

    /// An action name appears twice under one path.
    #[error("Action '{action}' is defined more than once for resource '{path}'.")]
    DuplicateAction {
        /// The resource path.
        path: String,
        /// The duplicated action name.
        action: String,
    },
}

/// Error type for resource calls.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource exists at the given path.
    #[error("Unknown resource '{path}'.")]
    UnknownResource {
        /// The path that was looked up.
        path: String,
    },

    /// The resource exists but does not allow the action.
    #[error("Resource '{path}' does not support action '{action}'.")]
    UnknownAction {
        /// The resource path.
        path: String,
        /// The requested action.
        action: String,
    },

    /// The HTTP call failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the underlying HTTP error, if any.
    #[must_use]
    pub const fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// Error returned when a pagination run ends in failure.
///
/// `E` is the error type of the caller's page and completion handlers.
#[derive(Debug, Error)]
pub enum PaginationError<E> {
    /// Fetching a page failed.
    #[error(transparent)]
    Request(ResourceError),

    /// The page handler or the completion handler failed.
    #[error("Pagination handler failed: {0}")]
    Handler(E),

    /// More pages remained after the configured page limit.
    #[error("Stopped after {max_pages} pages with more pages remaining.")]
    PageLimitExceeded {
        /// The configured limit.
        max_pages: usize,
    },
}

/// Error returned by the bulk job poller.
#[derive(Debug, Error)]
pub enum BulkJobError {
    /// A status lookup failed.
    #[error(transparent)]
    Request(#[from] ResourceError),

    /// The job reached the `ERROR` state.
    #[error("Bulk job failed: {}", .response.body)]
    Failed {
        /// The status response reporting the failure.
        response: Box<HttpResponse>,
    },

    /// The job was still running after the configured number of polls.
    #[error("Bulk job still running after {polls} polls.")]
    PollLimitExceeded {
        /// The configured limit.
        polls: u32,
    },
}
