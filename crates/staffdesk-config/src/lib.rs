//! Shared configuration for staffdesk tools.
//!
//! TOML settings layered over built-in defaults, a single environment
//! override for the API base URL, translation to
//! `staffdesk_core::ClientConfig`, and the tracing bootstrap.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use staffdesk_core::ClientConfig;

/// The only environment variable read: overrides `api.base_url`.
pub const API_URL_ENV: &str = "STAFFDESK_API_URL";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub paging: PagingSettings,

    #[serde(default)]
    pub downloads: DownloadSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// API base URL, including any path prefix (e.g. "http://localhost:3000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PagingSettings {
    #[serde(default = "default_staff_limit")]
    pub staff_limit: u32,

    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for PagingSettings {
    fn default() -> Self {
        Self {
            staff_limit: default_staff_limit(),
            default_limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Where CV PDFs are saved.
    #[serde(default = "default_download_dir")]
    pub dir: PathBuf,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            dir: default_download_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".into()
}
fn default_staff_limit() -> u32 {
    staffdesk_core::DEFAULT_STAFF_PAGE_LIMIT
}
fn default_limit() -> u32 {
    staffdesk_core::api::DEFAULT_PAGE_LIMIT
}
fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_level() -> String {
    "warn".into()
}

impl Config {
    /// Validate and translate into the core crate's runtime config.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base_url: Url = self
            .api
            .base_url
            .parse()
            .map_err(|e| ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("{e}: {}", self.api.base_url),
            })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", base_url.scheme()),
            });
        }

        for (field, value) in [
            ("paging.staff_limit", self.paging.staff_limit),
            ("paging.default_limit", self.paging.default_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation {
                    field: field.into(),
                    reason: "page size must be at least 1".into(),
                });
            }
        }

        let mut cfg = ClientConfig::new(base_url);
        cfg.timeout = self.api.timeout_secs.map(Duration::from_secs);
        cfg.staff_page_limit = self.paging.staff_limit;
        cfg.page_limit = self.paging.default_limit;
        cfg.download_dir.clone_from(&self.downloads.dir);
        Ok(cfg)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "staffdesk", "staffdesk").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("staffdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::raw()
                .only(&[API_URL_ENV])
                .map(|_| "api.base_url".into()),
        );

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Logging ─────────────────────────────────────────────────────────

/// Filter directive for a `-v` count.
pub fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is harmless;
/// the second call is ignored.
pub fn init_logging(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_listing_sizes() {
        let cfg = Config::default().to_client_config().unwrap();
        assert_eq!(cfg.staff_page_limit, 9);
        assert_eq!(cfg.page_limit, 10);
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.base_url.as_str(), "http://localhost:3000/api");
    }

    #[test]
    fn file_values_layer_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [api]
                base_url = "https://staff.example.com/api"
                timeout_secs = 15

                [paging]
                staff_limit = 12

                [downloads]
                dir = "cvs"
                "#,
            )?;

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.api.base_url, "https://staff.example.com/api");
            assert_eq!(cfg.api.timeout_secs, Some(15));
            assert_eq!(cfg.paging.staff_limit, 12);
            assert_eq!(cfg.paging.default_limit, 10);
            assert_eq!(cfg.downloads.dir, PathBuf::from("cvs"));
            assert_eq!(cfg.logging, LoggingSettings::default());

            let client = cfg.to_client_config().unwrap();
            assert_eq!(client.timeout, Some(Duration::from_secs(15)));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_base_url_only() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [api]
                base_url = "http://from-file/api"
                "#,
            )?;
            jail.set_env(API_URL_ENV, "http://from-env:4000/api");
            jail.set_env("STAFFDESK_PAGING_STAFF_LIMIT", "99");
            jail.set_env("STAFFDESK_API_TIMEOUT_SECS", "1");

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.api.base_url, "http://from-env:4000/api");
            assert_eq!(cfg.paging.staff_limit, 9);
            assert_eq!(cfg.api.timeout_secs, None);
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("nope.toml")).unwrap();
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn rejects_bad_urls_and_zero_page_sizes() {
        let mut cfg = Config::default();
        cfg.api.base_url = "not a url".into();
        assert!(matches!(
            cfg.to_client_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "api.base_url"
        ));

        cfg.api.base_url = "ftp://files.example.com".into();
        assert!(cfg.to_client_config().is_err());

        let mut cfg = Config::default();
        cfg.paging.default_limit = 0;
        assert!(matches!(
            cfg.to_client_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "paging.default_limit"
        ));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.api.base_url = "https://hr.example.com/api".into();
        cfg.logging.json = true;
        save_config_to(&cfg, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("base_url = \"https://hr.example.com/api\""));
        assert!(!written.contains("timeout_secs"));

        let loaded: Config = toml::from_str(&written).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(9), "trace");
    }
}
