//! Error types for SDK configuration.
//!
//! This module contains the error type used when creating or validating
//! configuration values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Configuration errors are always raised before any
//! network use.
//!
//! # Example
//!
//! ```rust
//! use besepa_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Besepa API key.")]
    EmptyApiKey,

    /// The configuration mode is not one of the supported modes.
    #[error("Invalid configuration mode '{mode}'. Required: 'live' or 'sandbox'.")]
    InvalidMode {
        /// The invalid mode that was provided.
        mode: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The proxy URL could not be parsed.
    #[error("Invalid proxy URL '{url}'.")]
    InvalidProxy {
        /// The invalid URL that was provided.
        url: String,
    },
}
