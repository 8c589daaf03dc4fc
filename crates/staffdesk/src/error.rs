//! CLI error types with miette diagnostics.
//!
//! Controllers report failures as plain messages; configuration and
//! validation problems keep their structure for actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use staffdesk_config::ConfigError;
use staffdesk_core::{CoreError, ValidationError};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the staffdesk API at {url}")]
    #[diagnostic(
        code(staffdesk::connection_failed),
        help(
            "Check that the API server is running.\n\
             Set the URL with --api-url, STAFFDESK_API_URL, or `staffdesk config init --url`."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Operations ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(staffdesk::operation_failed), help("Run with -v for details."))]
    Operation { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid input: {summary}")]
    #[diagnostic(code(staffdesk::validation))]
    Validation { summary: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(staffdesk::invalid_value))]
    InvalidValue { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(staffdesk::config),
        help("Check the config file shown by `staffdesk config path`.")
    )]
    Config(#[from] ConfigError),

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(staffdesk::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(staffdesk::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Validation { .. }
            | Self::InvalidValue { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Validation(v) => v.into(),
            CoreError::Config { message } => Self::InvalidValue {
                field: "api.base_url".into(),
                reason: message,
            },
            CoreError::Io(e) => Self::Io(e),
            other => Self::Operation {
                message: other.to_string(),
            },
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        let summary = err
            .fields()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation { summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let usage = CliError::NonInteractiveRequiresYes {
            action: "delete".into(),
        };
        assert_eq!(usage.exit_code(), exit_code::USAGE);

        let conn: CliError = CoreError::ConnectionFailed {
            url: "http://localhost:3000/api/staff".into(),
            reason: "refused".into(),
        }
        .into();
        assert_eq!(conn.exit_code(), exit_code::CONNECTION);

        let op = CliError::Operation {
            message: "Failed to fetch staff".into(),
        };
        assert_eq!(op.exit_code(), exit_code::GENERAL);
    }
}
