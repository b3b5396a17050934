//! Data-flow core of a photo-browsing client.
//!
//! Three screen view-models (list, detail, favorites) run as tokio actors
//! exposing input and output ports; an HTTP client talks to the photo API
//! and a key-value backed store keeps favorites.

pub mod api;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod logging;
pub mod storage;
pub mod ui;

pub use api::{HttpPhotoApi, NetworkError, Photo, PhotoApi, SearchResult};
pub use config::{Config, ConfigError};
pub use coordinator::{AppCoordinator, Navigation, Tab};
pub use storage::{FavoritesStore, FileKvStore, KeyValueStore, MemoryKvStore};
