//! Request error types for the Besepa API SDK.
//!
//! This module contains the error type shared by every HTTP operation. The
//! API reports failures through HTTP status codes; [`RequestError::from_status`]
//! is the single point where a status code becomes a semantic error.
//!
//! # Error Handling
//!
//! Capability methods ([`Find`](crate::rest::Find), [`Create`](crate::rest::Create),
//! etc.) never swallow these errors: anything the transport raises propagates
//! untouched to the caller. The one legacy exception lives in
//! [`Api::request`](crate::clients::Api::request), which converts
//! [`RequestError::BadRequest`] into an `{"error": ...}` body.
//!
//! # Example
//!
//! ```rust
//! use besepa_api::RequestError;
//!
//! let error = RequestError::from_status(404, "not here".to_string(), None);
//! assert!(matches!(error, RequestError::ResourceNotFound { .. }));
//! ```

use thiserror::Error;

/// Unified error type for API requests.
///
/// Status-mapped variants carry the raw response body; [`Redirection`]
/// additionally carries the `Location` header when present, and the
/// catch-all variants carry the status code itself.
///
/// [`Redirection`]: RequestError::Redirection
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with a redirect (301, 302, 303 or 307).
    #[error("Request failed with a redirect to {location:?}")]
    Redirection {
        /// Value of the `Location` response header, if present.
        location: Option<String>,
        /// The raw response body.
        body: String,
    },

    /// The request was malformed (400).
    #[error("Request failed with status 400 Bad Request: {body}")]
    BadRequest {
        /// The raw response body.
        body: String,
    },

    /// Authentication failed (401).
    #[error("Request failed with status 401 Unauthorized: {body}")]
    UnauthorizedAccess {
        /// The raw response body.
        body: String,
    },

    /// The credentials do not grant access to the resource (403).
    #[error("Request failed with status 403 Forbidden: {body}")]
    ForbiddenAccess {
        /// The raw response body.
        body: String,
    },

    /// The resource does not exist (404).
    #[error("Request failed with status 404 Not Found: {body}")]
    ResourceNotFound {
        /// The raw response body.
        body: String,
    },

    /// The HTTP method is not supported by the endpoint (405).
    #[error("Request failed with status 405 Method Not Allowed: {body}")]
    MethodNotAllowed {
        /// The raw response body.
        body: String,
    },

    /// The request conflicts with the current resource state (409).
    #[error("Request failed with status 409 Conflict: {body}")]
    ResourceConflict {
        /// The raw response body.
        body: String,
    },

    /// The resource existed but is gone (410).
    #[error("Request failed with status 410 Gone: {body}")]
    ResourceGone {
        /// The raw response body.
        body: String,
    },

    /// The resource failed server-side validation (422).
    #[error("Request failed with status 422 Unprocessable Entity: {body}")]
    ResourceInvalid {
        /// The raw response body.
        body: String,
    },

    /// Any other 4xx client error.
    #[error("Request failed with client error status {status}: {body}")]
    ClientError {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A 5xx server error.
    #[error("Request failed with server error status {status}: {body}")]
    ServerError {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A status code outside every known range.
    #[error("Unknown response code {status}: {body}")]
    ConnectionError {
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A required attribute (usually `id`) is absent from the resource.
    ///
    /// Raised before any network call is attempted.
    #[error("Missing required attribute '{key}'")]
    MissingKey {
        /// The name of the absent attribute.
        key: String,
    },

    /// Network or connection-level failure below the HTTP layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A body could not be serialized or deserialized as JSON.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

impl RequestError {
    /// Maps an HTTP status code to its error variant.
    ///
    /// This reproduces the full mapping table the API contract defines;
    /// successful (2xx) responses are never passed here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use besepa_api::RequestError;
    ///
    /// let error = RequestError::from_status(422, String::new(), None);
    /// assert!(matches!(error, RequestError::ResourceInvalid { .. }));
    ///
    /// let error = RequestError::from_status(600, String::new(), None);
    /// assert!(matches!(error, RequestError::ConnectionError { status: 600, .. }));
    /// ```
    #[must_use]
    pub fn from_status(status: u16, body: String, location: Option<String>) -> Self {
        match status {
            301 | 302 | 303 | 307 => Self::Redirection { location, body },
            400 => Self::BadRequest { body },
            401 => Self::UnauthorizedAccess { body },
            403 => Self::ForbiddenAccess { body },
            404 => Self::ResourceNotFound { body },
            405 => Self::MethodNotAllowed { body },
            409 => Self::ResourceConflict { body },
            410 => Self::ResourceGone { body },
            422 => Self::ResourceInvalid { body },
            402..=499 => Self::ClientError { status, body },
            500..=599 => Self::ServerError { status, body },
            _ => Self::ConnectionError { status, body },
        }
    }

    /// Returns the HTTP status code behind this error, when one exists.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Redirection { .. } => None,
            Self::BadRequest { .. } => Some(400),
            Self::UnauthorizedAccess { .. } => Some(401),
            Self::ForbiddenAccess { .. } => Some(403),
            Self::ResourceNotFound { .. } => Some(404),
            Self::MethodNotAllowed { .. } => Some(405),
            Self::ResourceConflict { .. } => Some(409),
            Self::ResourceGone { .. } => Some(410),
            Self::ResourceInvalid { .. } => Some(422),
            Self::ClientError { status, .. }
            | Self::ServerError { status, .. }
            | Self::ConnectionError { status, .. } => Some(*status),
            Self::MissingKey { .. } | Self::Network(_) | Self::Json(_) => None,
        }
    }
}

// Verify RequestError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestError>();
};
