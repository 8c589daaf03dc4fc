use thiserror::Error;

/// Top-level error type for the `staffdesk-api` crate.
///
/// Every repository call either decodes the server's reply or fails with one
/// of these. `staffdesk-core` maps them into domain-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// No response at all (connection refused, DNS failure, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server ──────────────────────────────────────────────────────
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", summarize(.body))]
    Http { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// HTTP status of the reply, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if no response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(e) if e.status().is_none())
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Best-effort server message from an error body.
    ///
    /// Recognizes `{"message": ".."}` and `{"error": ".."}` shapes, falling
    /// back to the raw body.
    pub fn server_message(&self) -> Option<String> {
        let Self::Http { body, .. } = self else {
            return None;
        };
        if body.trim().is_empty() {
            return None;
        }
        Some(summarize(body))
    }
}

fn summarize(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(m), ..
        })
        | Ok(ErrorBody {
            message: None,
            error: Some(m),
        }) => m,
        _ => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_message_field() {
        let err = Error::Http {
            status: 409,
            body: r#"{"message":"email already taken"}"#.into(),
        };
        assert_eq!(err.to_string(), "HTTP 409: email already taken");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_not_found());
    }

    #[test]
    fn http_error_falls_back_to_error_field_then_raw() {
        let err = Error::Http {
            status: 500,
            body: r#"{"error":"boom"}"#.into(),
        };
        assert_eq!(err.server_message().as_deref(), Some("boom"));

        let raw = Error::Http {
            status: 404,
            body: "Not Found".into(),
        };
        assert_eq!(raw.server_message().as_deref(), Some("Not Found"));
        assert!(raw.is_not_found());
    }

    #[test]
    fn empty_body_has_no_server_message() {
        let err = Error::Http {
            status: 502,
            body: "  ".into(),
        };
        assert!(err.server_message().is_none());
    }
}
