//! Resource-modeling infrastructure for the Besepa API.
//!
//! This module provides the generic layer every concrete resource type is
//! assembled from:
//!
//! - **[`Resource`]**: the dynamic attribute container with recursive
//!   nested-object conversion
//! - **[`AttrValue`]**: one converted attribute value
//! - **[`FromResource`]**: the seam selecting which wrapper type a
//!   response becomes
//! - **Capability traits** ([`Find`], [`List`], [`Create`], [`Update`],
//!   [`Delete`], [`Post`]): composable CRUD operations bound to an
//!   [`ApiResource`] implementation
//! - **[`Listing`]**: the object-vs-array result of a list operation
//! - **URL helpers** ([`join_url`], [`join_url_params`])
//!
//! # Example: defining a resource type
//!
//! ```rust,ignore
//! use besepa_api::rest::{ApiResource, Create, Find, FromResource, Resource};
//!
//! #[derive(Clone, Debug, Default)]
//! pub struct Mandate {
//!     resource: Resource,
//! }
//!
//! impl FromResource for Mandate {
//!     fn from_resource(resource: Resource) -> Self {
//!         Self { resource }
//!     }
//! }
//!
//! impl ApiResource for Mandate {
//!     const NAME: &'static str = "Mandate";
//!     const PATH: &'static str = "api/1/mandates";
//!
//!     fn resource(&self) -> &Resource {
//!         &self.resource
//!     }
//!
//!     fn resource_mut(&mut self) -> &mut Resource {
//!         &mut self.resource
//!     }
//! }
//!
//! impl Find for Mandate {}
//! impl Create for Mandate {}
//! ```

mod capabilities;
mod resource;
mod url;
mod value;

pub mod resources;

pub use capabilities::{ApiResource, Create, Delete, Find, List, Listing, Post, Update};
pub use resource::{FromResource, Resource};
pub use url::{join_url, join_url_params, to_query_pairs};
pub use value::AttrValue;
