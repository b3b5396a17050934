//! Local persistence: key-value backends and the favorites collection.

pub mod favorites;
pub mod kv;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore, StorageError};
