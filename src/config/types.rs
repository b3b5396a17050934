use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote photo API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Client credential sent as the `client_id` query parameter.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// `per_page` for search requests (default: 100, the API maximum).
    #[serde(default = "default_search_per_page")]
    pub search_per_page: u32,
}

/// List screen behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Quiet period before search text is sent (default: 500).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Page the cursor starts at (default: 1).
    #[serde(default = "default_first_page")]
    pub first_page: u32,
}

impl FeedConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Local persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for persisted values. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key the favorites collection is stored under.
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

impl StorageConfig {
    /// Resolved storage directory.
    ///
    /// Uses `~/.local/share/photo-browser` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`. Falls back to the current directory.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("photo-browser"),
        }
    }
}

fn default_base_url() -> String {
    "https://api.unsplash.com/".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_search_per_page() -> u32 {
    100
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_first_page() -> u32 {
    1
}

fn default_favorites_key() -> String {
    "photo".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            search_per_page: default_search_per_page(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            first_page: default_first_page(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            favorites_key: default_favorites_key(),
        }
    }
}
