//! Wire records returned by the photo API.
//!
//! The same types are persisted by the favorites store, so every optional
//! field is skipped when absent to keep present/absent distinguishable on
//! round-trip.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";
const UNKNOWN_DATE: &str = "Unknown date";

/// One image record with its metadata. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub urls: Urls,
    pub links: PhotoLinks,
    pub likes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsorship: Option<Sponsorship>,
    pub user: User,
}

impl Photo {
    /// `created_at` rendered as `dd.MM.yyyy HH:mm`, or "Unknown date".
    pub fn created_at_display(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            Err(_) => UNKNOWN_DATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
    pub small_s3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub download: String,
    pub download_location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsorship {
    pub impression_urls: Vec<String>,
    pub tagline: String,
    pub tagline_url: String,
    pub sponsor: User,
}

/// Response body of `GET /search/photos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<Photo>,
}
