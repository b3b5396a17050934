//! HTTP client for the photo API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::NetworkError;
use crate::api::models::{Photo, SearchResult};
use crate::api::request::ApiRequest;
use crate::config::{ApiConfig, ConfigError, SecureString};

/// Max bytes of an error body kept in `NetworkError::Status`.
const ERROR_BODY_LIMIT: usize = 512;

/// Remote photo source consumed by the state machines.
///
/// Both calls are single attempts: a failure surfaces to the caller as-is.
#[async_trait]
pub trait PhotoApi: Send + Sync {
    /// Fetch one page of the editorial feed. Pages start at 1.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError>;

    /// Run a full-text search. Results are not paginated.
    async fn search(&self, query: &str) -> Result<SearchResult, NetworkError>;
}

/// `PhotoApi` backed by reqwest, authenticated with a client-id query
/// parameter.
pub struct HttpPhotoApi {
    client: Client,
    base_url: String,
    client_id: SecureString,
    search_per_page: u32,
}

impl HttpPhotoApi {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns `MissingCredential` when no client id is configured, or
    /// `ClientBuild` if the TLS/HTTP stack cannot be initialised.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client_id = config
            .resolve_client_id()
            .ok_or(ConfigError::MissingCredential)?;
        Self::new(config, client_id)
    }

    pub fn new(config: &ApiConfig, client_id: SecureString) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|source| ConfigError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            client_id,
            search_per_page: config.search_per_page,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, NetworkError> {
        let endpoint = request.endpoint.path();
        let url = request.url(&self.base_url)?;

        tracing::debug!(endpoint, method = request.method.as_str(), "API request");

        let response = self
            .client
            .request(request.method.into(), url)
            .send()
            .await
            .map_err(|e| NetworkError::Transport {
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate_utf8(&mut body, ERROR_BODY_LIMIT);
            tracing::warn!(endpoint, status = status.as_u16(), "API returned error status");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| NetworkError::Transport {
            source: e.without_url(),
        })?;

        serde_json::from_slice(&bytes).map_err(|source| NetworkError::Decode { source })
    }
}

#[async_trait]
impl PhotoApi for HttpPhotoApi {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Photo>, NetworkError> {
        let request = ApiRequest::list_photos(self.client_id.expose(), page);
        let photos: Vec<Photo> = self.get_json(request).await?;
        tracing::info!(page, count = photos.len(), "Fetched photo page");
        Ok(photos)
    }

    async fn search(&self, query: &str) -> Result<SearchResult, NetworkError> {
        let request =
            ApiRequest::search_photos(self.client_id.expose(), query, self.search_per_page);
        let result: SearchResult = self.get_json(request).await?;
        tracing::info!(
            total = result.total,
            count = result.results.len(),
            "Search completed"
        );
        Ok(result)
    }
}

fn truncate_utf8(text: &mut String, limit: usize) {
    if text.len() <= limit {
        return;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        let mut text = "ééé".to_string();
        truncate_utf8(&mut text, 3);
        assert_eq!(text, "é");

        let mut short = "ok".to_string();
        truncate_utf8(&mut short, 10);
        assert_eq!(short, "ok");
    }

    #[test]
    fn from_config_requires_credential() {
        let config = ApiConfig {
            client_id: None,
            ..ApiConfig::default()
        };
        // The env override is read as well; only assert when it is unset.
        if std::env::var(crate::config::CLIENT_ID_ENV_VAR).is_err() {
            assert!(matches!(
                HttpPhotoApi::from_config(&config),
                Err(ConfigError::MissingCredential)
            ));
        }
    }
}
