// ── Core error types ──
//
// Domain-level errors from staffdesk-core. The `From<staffdesk_api::Error>`
// impl translates transport-layer failures into these variants. Collection
// controllers flatten every variant into an `ErrorKind` message before it
// reaches a presentation layer.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Malformed response: {message}")]
    Decode { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if the server answered).
        status: Option<u16>,
    },

    // ── Local errors ─────────────────────────────────────────────────
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// HTTP status, if the failure came from a server reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<staffdesk_api::Error> for CoreError {
    fn from(err: staffdesk_api::Error) -> Self {
        match err {
            staffdesk_api::Error::Network(ref e) if e.status().is_none() => {
                CoreError::ConnectionFailed {
                    url: e
                        .url()
                        .map_or_else(|| "<unknown>".into(), ToString::to_string),
                    reason: e.to_string(),
                }
            }
            staffdesk_api::Error::Network(e) => CoreError::Api {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
            },
            staffdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            http @ staffdesk_api::Error::Http { .. } => {
                let message = http.server_message();
                match http.status() {
                    Some(404) => CoreError::NotFound {
                        message: message.unwrap_or_else(|| "resource".into()),
                    },
                    status => CoreError::Api {
                        message: message
                            .unwrap_or_else(|| format!("HTTP {}", status.unwrap_or_default())),
                        status,
                    },
                }
            }
            staffdesk_api::Error::Decode { message, body: _ } => CoreError::Decode { message },
        }
    }
}

// ── Controller-facing error ──────────────────────────────────────────

/// The error a controller surfaces to its presentation layer.
///
/// Deliberately carries only a message; structured details are logged at
/// the controller boundary and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorKind {
    message: String,
}

impl ErrorKind {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
