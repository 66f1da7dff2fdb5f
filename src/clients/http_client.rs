//! HTTP client for Besepa API communication.
//!
//! This module provides the [`Api`] type, the transport every capability
//! method goes through. It owns endpoint resolution, default headers
//! (including Bearer authentication), response parsing, and the
//! status-code-to-error mapping.

use std::collections::HashMap;
use std::time::Instant;

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::clients::errors::RequestError;
use crate::config::{BesepaConfig, Mode};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Besepa API.
///
/// The client handles:
/// - Base endpoint resolution from the configured mode (or host override)
/// - Default headers including `Authorization: Bearer` and User-Agent
/// - Response body parsing and `response` envelope unwrapping
/// - Status-code-to-error mapping shared by all four verbs
///
/// Redirects are never followed; 3xx responses surface as
/// [`RequestError::Redirection`] so the mapping table stays observable.
///
/// # Thread Safety
///
/// `Api` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,no_run
/// use besepa_api::{Api, ApiKey, BesepaConfig, Mode};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BesepaConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .mode(Mode::Sandbox)
///     .build()?;
/// let api = Api::new(&config)?;
///
/// let body = api.get("api/1/customers/1", None).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Api {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base endpoint (e.g. `https://sandbox.besepa.com`).
    endpoint: String,
    /// The configured environment mode.
    mode: Mode,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify Api is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Api>();
};

impl Api {
    /// Creates a new client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxy`] if a configured proxy URL
    /// cannot be parsed.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    pub fn new(config: &BesepaConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Besepa API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        // Redirects must surface as Redirection errors, not be followed
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none());

        if let Some(proxy) = config.proxy() {
            let proxy = reqwest::Proxy::all(proxy).map_err(|_| ConfigError::InvalidProxy {
                url: proxy.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().expect("Failed to create HTTP client");

        Ok(Self {
            client,
            endpoint,
            mode: config.mode(),
            default_headers,
        })
    }

    /// Creates a client from the process environment.
    ///
    /// Convenience wrapper over [`BesepaConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment holds no valid
    /// configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = BesepaConfig::from_env()?;
        Self::new(&config)
    }

    /// Returns the base endpoint for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured environment mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] per the status mapping table.
    pub async fn get(
        &self,
        path: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        self.request(path, Method::GET, None, headers).await
    }

    /// Sends a POST request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] per the status mapping table.
    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        self.request(path, Method::POST, Some(body), headers).await
    }

    /// Sends a PATCH request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] per the status mapping table.
    pub async fn patch(
        &self,
        path: &str,
        body: &Value,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        self.request(path, Method::PATCH, Some(body), headers).await
    }

    /// Sends a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] per the status mapping table.
    pub async fn delete(
        &self,
        path: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        self.request(path, Method::DELETE, None, headers).await
    }

    /// Makes an HTTP call, formats the response, and does error handling.
    ///
    /// Legacy boundary: a [`RequestError::BadRequest`] is converted into a
    /// returned `{"error": ...}` value instead of failing, so that
    /// boolean-returning resource operations can report validation failures
    /// through their `error` attribute. Every other error propagates. The
    /// capability layer itself never catches anything.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] for any non-2xx, non-400 response, or for
    /// network and JSON failures.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        match self.http_call(path, method, body, headers).await {
            Err(RequestError::BadRequest { body }) => {
                let detail: Value =
                    serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body));
                Ok(json!({ "error": detail }))
            }
            other => other,
        }
    }

    /// Makes the HTTP call and logs request/response information.
    async fn http_call(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, RequestError> {
        let url = format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        // Merge headers; per-call headers win over defaults
        let mut http_headers = self.default_headers.clone();
        if let Some(extra) = headers {
            for (key, value) in extra {
                http_headers.insert(key.clone(), value.clone());
            }
        }

        tracing::info!("Request[{method}]: {url}");
        if self.mode.is_live() {
            tracing::info!("Not logging full request/response headers and body in live mode for compliance");
        } else {
            tracing::debug!("Request headers: {http_headers:?}");
            if let Some(body) = body {
                tracing::debug!("Request body: {body}");
            }
        }

        let mut req_builder = self.client.request(method, &url);
        for (key, value) in &http_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let start = Instant::now();
        let response = req_builder.send().await?;
        let duration = start.elapsed();

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let content = response.text().await.unwrap_or_default();

        tracing::info!("Response[{status}]: duration {duration:?}");
        if !self.mode.is_live() {
            tracing::debug!("Response body: {content}");
        }

        Self::handle_response(status, &content, location)
    }

    /// Validates an HTTP response and parses its body.
    ///
    /// Successful responses are unwrapped one level through the `response`
    /// envelope key when present; an empty body yields an empty mapping.
    /// Everything else maps through [`RequestError::from_status`].
    fn handle_response(
        status: u16,
        content: &str,
        location: Option<String>,
    ) -> Result<Value, RequestError> {
        match status {
            200..=299 => {
                if content.is_empty() {
                    return Ok(Value::Object(Map::new()));
                }
                let parsed: Value = serde_json::from_str(content)?;
                match parsed.get("response") {
                    Some(inner) => Ok(inner.clone()),
                    None => Ok(parsed),
                }
            }
            _ => Err(RequestError::from_status(
                status,
                content.to_string(),
                location,
            )),
        }
    }
}
