//! Persisted favorites collection.
//!
//! The whole collection lives as one JSON array under a single key. Every
//! read goes to the backing store and every mutation rewrites the full
//! array. The store does not deduplicate: callers check `contains` first.
//! Concurrent read-modify-write from two holders can lose an update.

use std::sync::Arc;

use crate::api::Photo;
use crate::storage::kv::{KeyValueStore, StorageError};

/// Default key, kept stable so existing installs find their favorites.
pub const FAVORITES_KEY: &str = "photo";

#[derive(Clone)]
pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, FAVORITES_KEY)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// All saved photos in insertion order.
    ///
    /// A missing, unreadable or undecodable blob reads as empty.
    pub fn read_all(&self) -> Vec<Photo> {
        let bytes = match self.kv.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Favorites read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Favorites blob undecodable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read_all().iter().any(|photo| photo.id == id)
    }

    /// Append `photo` and rewrite the collection.
    pub fn add(&self, photo: Photo) {
        let mut photos = self.read_all();
        let id = photo.id.clone();
        photos.push(photo);
        if self.write_all(&photos) {
            tracing::info!(photo_id = %id, total = photos.len(), "Added favorite");
        }
    }

    /// Remove the first entry with `id`. Absent ids leave the collection
    /// untouched, though it is still rewritten.
    pub fn remove(&self, id: &str) {
        let mut photos = self.read_all();
        match photos.iter().position(|photo| photo.id == id) {
            Some(index) => {
                photos.remove(index);
                tracing::info!(photo_id = %id, "Removed favorite");
            }
            None => tracing::debug!(photo_id = %id, "Remove for unknown favorite"),
        }
        self.write_all(&photos);
    }

    /// Failures are logged and dropped.
    fn write_all(&self, photos: &[Photo]) -> bool {
        let result = serde_json::to_vec(photos)
            .map_err(|source| StorageError::Encode { source })
            .and_then(|bytes| self.kv.set(&self.key, &bytes));

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Favorites write dropped");
                false
            }
        }
    }
}
