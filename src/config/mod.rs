//! Configuration types for the Besepa API SDK.
//!
//! This module provides the core configuration types used to initialize
//! a client for API communication with Besepa.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BesepaConfig`]: The main configuration struct holding all SDK settings
//! - [`BesepaConfigBuilder`]: A builder for constructing [`BesepaConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Mode`]: The live/sandbox environment selector
//!
//! # Example
//!
//! ```rust
//! use besepa_api::{ApiKey, BesepaConfig, Mode};
//!
//! let config = BesepaConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .mode(Mode::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint(), "https://sandbox.besepa.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, Mode};

use crate::error::ConfigError;

/// Environment variable holding the API key for [`BesepaConfig::from_env`].
pub const API_KEY_ENV: &str = "BESEPA_API_KEY";

/// Environment variable holding the mode for [`BesepaConfig::from_env`].
pub const MODE_ENV: &str = "BESEPA_MODE";

/// Configuration for the Besepa API SDK.
///
/// This struct holds all configuration needed to construct a client:
/// the environment mode, the API key used for Bearer authentication, and
/// optional transport settings.
///
/// # Thread Safety
///
/// `BesepaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use besepa_api::{ApiKey, BesepaConfig, Mode};
///
/// let config = BesepaConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .mode(Mode::Live)
///     .build()
///     .unwrap();
///
/// assert!(config.mode().is_live());
/// ```
#[derive(Clone, Debug)]
pub struct BesepaConfig {
    mode: Mode,
    api_key: ApiKey,
    proxy: Option<String>,
    host: Option<String>,
    user_agent_prefix: Option<String>,
}

impl BesepaConfig {
    /// Creates a new builder for constructing a `BesepaConfig`.
    #[must_use]
    pub fn builder() -> BesepaConfigBuilder {
        BesepaConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `BESEPA_API_KEY` and the mode from
    /// `BESEPA_MODE` (defaulting to sandbox when unset). This is the
    /// convenience replacement for an ambient process-wide default: the
    /// resulting configuration is still an explicit value the caller owns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `BESEPA_API_KEY` is
    /// unset, [`ConfigError::EmptyApiKey`] if it is empty, or
    /// [`ConfigError::InvalidMode`] if `BESEPA_MODE` holds an unknown mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingRequiredField { field: API_KEY_ENV })?;
        let mode = match std::env::var(MODE_ENV) {
            Ok(mode) => mode.parse()?,
            Err(_) => Mode::Sandbox,
        };

        Self::builder()
            .api_key(ApiKey::new(api_key)?)
            .mode(mode)
            .build()
    }

    /// Returns the environment mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base endpoint requests are resolved against.
    ///
    /// This is the host override when one is configured, otherwise the
    /// endpoint selected by the mode table.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.host.as_deref().unwrap_or(self.mode.endpoint())
    }
}

/// Builder for constructing [`BesepaConfig`] instances.
///
/// The API key is required; everything else has a default. Validation
/// happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct BesepaConfigBuilder {
    mode: Mode,
    api_key: Option<ApiKey>,
    proxy: Option<String>,
    host: Option<String>,
    user_agent_prefix: Option<String>,
}

impl BesepaConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the environment mode (defaults to [`Mode::Sandbox`]).
    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets a proxy URL all requests are routed through.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Overrides the base endpoint selected by the mode table.
    ///
    /// Mainly useful for tests and local gateways.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no API key was set.
    pub fn build(self) -> Result<BesepaConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(BesepaConfig {
            mode: self.mode,
            api_key,
            proxy: self.proxy,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify BesepaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BesepaConfig>();
};
