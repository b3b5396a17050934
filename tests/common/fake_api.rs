//! Scriptable in-process `PhotoApi`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use photo_browser::api::{NetworkError, Photo, PhotoApi, SearchResult};

use super::photo;

/// One call observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Page(u32),
    Search(String),
}

#[derive(Default)]
struct Script {
    pages: HashMap<u32, Vec<Photo>>,
    searches: HashMap<String, Vec<Photo>>,
    failing_pages: HashSet<u32>,
    failing_searches: HashSet<String>,
    delay: Duration,
}

/// Unscripted pages hold three photos `p<page>-<n>`; unscripted searches
/// return two photos `s-<query>-<n>`.
#[derive(Default)]
pub struct FakePhotoApi {
    script: Mutex<Script>,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakePhotoApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_page(&self, page: u32, photos: Vec<Photo>) {
        self.script.lock().pages.insert(page, photos);
    }

    pub fn set_search(&self, query: &str, photos: Vec<Photo>) {
        self.script.lock().searches.insert(query.to_string(), photos);
    }

    pub fn fail_page(&self, page: u32) {
        self.script.lock().failing_pages.insert(page);
    }

    pub fn fail_search(&self, query: &str) {
        self.script.lock().failing_searches.insert(query.to_string());
    }

    /// Every call sleeps this long before answering.
    pub fn set_delay(&self, delay: Duration) {
        self.script.lock().delay = delay;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Search(query) => Some(query),
                ApiCall::Page(_) => None,
            })
            .collect()
    }

    pub fn page_calls(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Page(page) => Some(page),
                ApiCall::Search(_) => None,
            })
            .collect()
    }

    pub fn default_page(page: u32) -> Vec<Photo> {
        (1..=3).map(|n| photo(&format!("p{}-{}", page, n))).collect()
    }

    fn unavailable() -> NetworkError {
        NetworkError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
    }
}

#[async_trait]
impl PhotoApi for FakePhotoApi {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError> {
        self.calls.lock().push(ApiCall::Page(page));
        let delay = self.script.lock().delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let script = self.script.lock();
        if script.failing_pages.contains(&page) {
            return Err(Self::unavailable());
        }
        Ok(script
            .pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Self::default_page(page)))
    }

    async fn search(&self, query: &str) -> Result<SearchResult, NetworkError> {
        self.calls.lock().push(ApiCall::Search(query.to_string()));
        let delay = self.script.lock().delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let script = self.script.lock();
        if script.failing_searches.contains(query) {
            return Err(Self::unavailable());
        }
        let results = script.searches.get(query).cloned().unwrap_or_else(|| {
            (1..=2)
                .map(|n| photo(&format!("s-{}-{}", query, n)))
                .collect()
        });
        Ok(SearchResult {
            total: results.len() as u64,
            total_pages: 1,
            results,
        })
    }
}
