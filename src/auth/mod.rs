//! Authentication types for the Constant Contact API client.
//!
//! # Overview
//!
//! - [`Credentials`]: The API key and access token sent with each request
//! - [`ClientHandle`]: Produces authenticated HTTP clients, reading the
//!   credentials afresh on every call
//!
//! Token acquisition and refresh happen outside this crate. When a new
//! token is obtained, hand it to [`ClientHandle::set_access_token`].

mod credentials;
mod handle;

pub use credentials::Credentials;
pub use handle::ClientHandle;
