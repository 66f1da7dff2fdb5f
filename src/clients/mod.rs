//! HTTP client functionality for the Besepa API.
//!
//! This module provides the transport layer every resource operation goes
//! through:
//!
//! - [`Api`]: the HTTP client with Bearer authentication and endpoint
//!   resolution
//! - [`RequestError`]: the unified request error type with the
//!   status-code mapping table

mod errors;
mod http_client;

pub use errors::RequestError;
pub use http_client::{Api, SDK_VERSION};
