//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_api;

use std::sync::Arc;
use std::time::Duration;

use photo_browser::api::{Photo, PhotoLinks, Sponsorship, Urls, User};
use photo_browser::storage::{KeyValueStore, StorageError};

/// Photo fixture with every field filled from `id`.
pub fn photo(id: &str) -> Photo {
    let link = |kind: &str| format!("https://images.example.com/{}/{}", id, kind);
    Photo {
        id: id.to_string(),
        created_at: "2024-05-17T09:30:00Z".to_string(),
        updated_at: "2024-05-18T11:00:00Z".to_string(),
        urls: Urls {
            raw: link("raw"),
            full: link("full"),
            regular: link("regular"),
            small: link("small"),
            thumb: link("thumb"),
            small_s3: link("small_s3"),
        },
        links: PhotoLinks {
            self_link: link("self"),
            html: link("html"),
            download: link("download"),
            download_location: link("download_location"),
        },
        likes: 42,
        sponsorship: None,
        user: User {
            name: format!("Author of {}", id),
            location: Some("Lisbon".to_string()),
        },
    }
}

pub fn sponsored_photo(id: &str) -> Photo {
    let mut p = photo(id);
    p.sponsorship = Some(Sponsorship {
        impression_urls: vec!["https://ads.example.com/1".to_string()],
        tagline: "Made to move".to_string(),
        tagline_url: "https://brand.example.com".to_string(),
        sponsor: User {
            name: "Brand".to_string(),
            location: None,
        },
    });
    p
}

pub fn ids(photos: &[Photo]) -> Vec<String> {
    photos.iter().map(|p| p.id.clone()).collect()
}

/// JSON for a feed page, shaped like the real API.
pub fn page_json(photos: &[Photo]) -> String {
    serde_json::to_string(photos).unwrap()
}

/// JSON for a search response.
pub fn search_json(photos: &[Photo]) -> String {
    serde_json::json!({
        "total": photos.len(),
        "total_pages": 1,
        "results": photos,
    })
    .to_string()
}

/// Key-value store whose reads return `initial` and whose writes always fail.
pub struct FailingKv {
    pub initial: Option<Vec<u8>>,
}

impl KeyValueStore for FailingKv {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.initial.clone())
    }

    fn set(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: format!("/read-only/{}.json", key).into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

pub fn failing_kv() -> Arc<FailingKv> {
    Arc::new(FailingKv { initial: None })
}

/// Upper bound for awaiting view-model state in tests.
pub const WAIT: Duration = Duration::from_secs(5);

pub async fn within<F: std::future::Future>(future: F) -> F::Output {
    tokio::time::timeout(WAIT, future)
        .await
        .expect("timed out waiting for view-model")
}
