//! # Besepa API Rust SDK
//!
//! A Rust SDK for the Besepa API, mapping its dynamic, schema-less JSON
//! REST endpoints onto an object model with CRUD-style operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A dynamic attribute container ([`Resource`](rest::Resource)) that
//!   recursively converts nested JSON into resource objects and back
//! - Composable capability traits ([`Find`](rest::Find), [`List`](rest::List),
//!   [`Create`](rest::Create), [`Update`](rest::Update),
//!   [`Delete`](rest::Delete), [`Post`](rest::Post)) that concrete resource
//!   types assemble from
//! - Concrete resource types ([`Customer`], [`Debit`]) with nested
//!   sub-resource actions
//! - A centralized transport ([`Api`]) with Bearer authentication and a
//!   complete status-code-to-error mapping
//! - Type-safe configuration via [`BesepaConfig`] and
//!   [`BesepaConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use besepa_api::{ApiKey, BesepaConfig, Mode};
//!
//! // Create configuration using the builder pattern
//! let config = BesepaConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .mode(Mode::Sandbox)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with resources
//!
//! ```rust,ignore
//! use besepa_api::rest::{Create, Find, List, Update};
//! use besepa_api::{Api, Customer};
//! use serde_json::json;
//!
//! let api = Api::new(&config)?;
//!
//! // Create
//! let mut customer = Customer::new(json!({
//!     "name": "Ender Wiggin",
//!     "taxid": "68571053A",
//!     "reference": "C1",
//! }));
//! if customer.create(&api).await? {
//!     println!("created customer {}", customer["id"]);
//! }
//!
//! // Find
//! let customer = Customer::find(&api, "1").await?;
//!
//! // List with query parameters
//! let customers = Customer::all(&api, Some(&json!({"per_page": 2}))).await?;
//!
//! // Update in place
//! let mut customer = Customer::find(&api, "1").await?;
//! customer.update(&api, Some(json!({"name": "Andrew Wiggin"}))).await?;
//!
//! // Nested sub-resource action
//! let account = customer
//!     .create_bank_account(&api, json!({"iban": "NL33ABNA0618708937"}))
//!     .await?;
//! ```
//!
//! ## Error handling
//!
//! The transport maps every response status to a semantic
//! [`RequestError`] variant and capability methods propagate those
//! untouched. The boolean-returning operations (`create`, `update`,
//! `delete`) additionally report API-level validation failures through the
//! resource's `error` attribute and
//! [`success()`](rest::Resource::success) instead of failing, because the
//! transport's request wrapper converts `400 Bad Request` into a merged
//! `{"error": ...}` value.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based; every capability
//!   call takes the transport explicitly
//! - **Fail-fast validation**: configuration newtypes validate on
//!   construction, before any network use
//! - **Thread-safe**: [`Api`] and [`BesepaConfig`] are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use clients::{Api, RequestError};
pub use config::{ApiKey, BesepaConfig, BesepaConfigBuilder, Mode};
pub use error::ConfigError;

// Re-export the concrete resource types
pub use rest::resources::{Customer, Debit};
