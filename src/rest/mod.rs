//! Resource layer for the Constant Contact API.
//!
//! This module turns an [`ActionCatalog`] into a navigable [`ResourceTree`]
//! and provides the two long-running helpers built on top of it:
//!
//! - **[`ResourceTree`] / [`ResourceNode`]**: one callable node per catalog path
//! - **[`Paginator`]**: follows `meta.pagination.next_link` cursors page by page
//! - **[`wait_for`]**: samples a bulk activity until it completes or fails
//! - **[`build_request`] / [`invoke`]**: the request invoker behind every call
//!
//! # Example
//!
//! ```rust,ignore
//! use constant_contact::rest::{ActionCatalog, ResourceTree};
//! use serde_json::json;
//!
//! let tree = ResourceTree::build(&ActionCatalog::builtin()?, &handle);
//!
//! let lists = tree.resource("lists").unwrap();
//! let response = lists.call("list", json!({"modified_since": "2026-01-01"})).await?;
//!
//! for list in response.body.as_array().unwrap() {
//!     println!("- {}", list["name"]);
//! }
//! ```

mod bulk;
mod catalog;
mod errors;
mod invoke;
mod pagination;
mod path;
mod resource;

pub use bulk::{
    wait_for, BulkJobStatus, BulkWaitOptions, BULK_ACTIVITIES, DEFAULT_POLL_INTERVAL,
    MAX_POLL_INTERVAL,
};
pub use catalog::{ActionCatalog, ActionSpec};
pub use errors::{BulkJobError, CatalogError, PaginationError, ResourceError};
pub use invoke::{build_request, invoke};
pub use pagination::{follow_request, page_results, PaginationOptions, Paginator};
pub use path::{param_to_string, render_template, split_versioned_url};
pub use resource::{ResourceNode, ResourceTree};
