//! Remote photo API: records, request building and the HTTP client.

pub mod client;
pub mod error;
pub mod models;
pub mod request;

pub use client::{HttpPhotoApi, PhotoApi};
pub use error::NetworkError;
pub use models::{Photo, PhotoLinks, SearchResult, Sponsorship, Urls, User};
pub use request::{ApiRequest, Endpoint, HttpMethod};
