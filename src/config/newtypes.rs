//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around configuration values that
//! validate their contents on construction. Invalid values are rejected with
//! clear error messages before any network use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A validated Besepa API key.
///
/// This newtype ensures the API key is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use besepa_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// The environment a client is configured against.
///
/// The mode selects the base endpoint all request paths are resolved
/// against. There are exactly two environments:
///
/// - [`Mode::Live`] -> `https://api.besepa.com`
/// - [`Mode::Sandbox`] -> `https://sandbox.besepa.com`
///
/// # Example
///
/// ```rust
/// use besepa_api::Mode;
///
/// let mode: Mode = "sandbox".parse().unwrap();
/// assert_eq!(mode, Mode::Sandbox);
/// assert_eq!(mode.endpoint(), "https://sandbox.besepa.com");
///
/// assert!("staging".parse::<Mode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The production environment.
    Live,
    /// The developer sandbox environment.
    #[default]
    Sandbox,
}

impl Mode {
    /// Returns the base endpoint for this mode.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Live => "https://api.besepa.com",
            Self::Sandbox => "https://sandbox.besepa.com",
        }
    }

    /// Returns the mode name as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sandbox => "sandbox",
        }
    }

    /// Returns `true` for the production environment.
    ///
    /// Full request/response bodies are only logged when this is `false`.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Self::Live),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(ConfigError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}
