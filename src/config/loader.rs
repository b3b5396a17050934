use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest accepted `per_page`, enforced by the API.
const MAX_SEARCH_PER_PAGE: u32 = 100;
const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;
/// Far beyond any real feed; leaves the page cursor room to advance.
const MAX_FIRST_PAGE: u32 = 1_000_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("No API client id configured (set api.client_id or {})", crate::config::CLIENT_ID_ENV_VAR)]
    MissingCredential,

    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/photo-browser/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("photo-browser").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute http(s) URL
    /// - `api.search_per_page` is within 1..=100
    /// - `feed.search_debounce_ms` is at most 10 seconds
    /// - `feed.first_page` is within 1..=1_000_000
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("api.base_url '{}' is invalid: {}", self.api.base_url, e),
            }
        })?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url must use http or https, got '{}'",
                    base_url.scheme()
                ),
            });
        }

        if self.api.search_per_page == 0 || self.api.search_per_page > MAX_SEARCH_PER_PAGE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.search_per_page must be between 1 and {}, got {}",
                    MAX_SEARCH_PER_PAGE, self.api.search_per_page
                ),
            });
        }

        if self.feed.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "feed.search_debounce_ms must be at most {}, got {}",
                    MAX_SEARCH_DEBOUNCE_MS, self.feed.search_debounce_ms
                ),
            });
        }

        if self.feed.first_page == 0 || self.feed.first_page > MAX_FIRST_PAGE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "feed.first_page must be between 1 and {}, got {}",
                    MAX_FIRST_PAGE, self.feed.first_page
                ),
            });
        }

        Ok(())
    }
}
