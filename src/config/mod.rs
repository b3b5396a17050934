//! Configuration loading and credential handling.

pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{SecureString, CLIENT_ID_ENV_VAR};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, FeedConfig, StorageConfig};
