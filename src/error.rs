/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Bbox client
//!
//! Every failure surfaced by the library is an [`AppError`]. Callers that only
//! care about the broad category can match on [`AppError::kind`].

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type BboxResult<T> = Result<T, AppError>;

/// Broad classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad credentials, missing or expired session
    Authentication,
    /// Connection refused, DNS failure, timeout, unexpected HTTP status
    Transport,
    /// Response JSON does not match the expected record shape
    Validation,
    /// Response is not usable at all (not JSON, no session cookie)
    Protocol,
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The router rejected the password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The router answered 401/403 to an authenticated request
    #[error("session expired, re-authentication required")]
    SessionExpired,

    /// An endpoint was called before a successful login
    #[error("not authenticated")]
    NotAuthenticated,

    /// Too many login attempts
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Login could not complete (unreachable host, timeout, unexpected status)
    #[error("login failed: {reason}")]
    LoginFailed {
        /// What went wrong
        reason: String,
        /// Transport error behind the failure, if any
        #[source]
        source: Option<Box<AppError>>,
    },

    /// Underlying HTTP transport failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Non-success status that has no more specific meaning
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// A field of the response is missing or has the wrong type
    #[error("validation error at `{field}`: {message}")]
    Validation {
        /// Dotted path of the offending field, rooted at the response envelope
        field: String,
        /// Deserializer message
        message: String,
    },

    /// The response could not be interpreted
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Raw JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or argument
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Builds a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a login failure with no underlying transport error
    pub fn login_failed(reason: impl Into<String>) -> Self {
        AppError::LoginFailed {
            reason: reason.into(),
            source: None,
        }
    }

    /// Returns the category this error belongs to
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidCredentials
            | AppError::SessionExpired
            | AppError::NotAuthenticated
            | AppError::RateLimitExceeded(_)
            | AppError::LoginFailed { .. } => ErrorKind::Authentication,
            AppError::Network(_)
            | AppError::Timeout(_)
            | AppError::Unexpected(_)
            | AppError::Io(_) => ErrorKind::Transport,
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::Protocol(_) | AppError::Json(_) | AppError::InvalidInput(_) => {
                ErrorKind::Protocol
            }
        }
    }

    /// True for bad credentials and missing or expired sessions
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }

    /// True for network failures and timeouts
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// True when the response shape did not match the expected record
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Configured timeout, in seconds, when the request ran out of time
    ///
    /// Also looks through a [`AppError::LoginFailed`] caused by a timeout.
    #[must_use]
    pub fn timeout_secs(&self) -> Option<u64> {
        match self {
            AppError::Timeout(secs) => Some(*secs),
            AppError::LoginFailed {
                source: Some(source),
                ..
            } => source.timeout_secs(),
            _ => None,
        }
    }

    /// Name of the offending field for validation errors
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
