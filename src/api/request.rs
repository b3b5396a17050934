//! Request descriptions for the photo API.

use crate::api::error::NetworkError;

/// HTTP verbs understood by the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// API endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListPhotos,
    SearchPhotos,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::ListPhotos => "photos",
            Self::SearchPhotos => "search/photos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            method: HttpMethod::Get,
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// `GET /photos?client_id=…&page=<n>`
    pub fn list_photos(client_id: &str, page: u32) -> Self {
        Self::new(Endpoint::ListPhotos)
            .with_query("client_id", client_id)
            .with_query("page", page)
    }

    /// `GET /search/photos?query=<text>&client_id=…&per_page=<n>`
    pub fn search_photos(client_id: &str, query: &str, per_page: u32) -> Self {
        Self::new(Endpoint::SearchPhotos)
            .with_query("query", query)
            .with_query("client_id", client_id)
            .with_query("per_page", per_page)
    }

    /// Full URL against `base_url` with percent-encoded query values. A
    /// missing trailing slash on the base is tolerated.
    ///
    /// Errors report the endpoint URL only; the query carries the client id.
    pub fn url(&self, base_url: &str) -> Result<reqwest::Url, NetworkError> {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint.path());
        let parsed = if self.query.is_empty() {
            reqwest::Url::parse(&endpoint)
        } else {
            reqwest::Url::parse_with_params(&endpoint, &self.query)
        };
        parsed.map_err(|e| NetworkError::InvalidUrl {
            url: endpoint,
            reason: e.to_string(),
        })
    }
}
