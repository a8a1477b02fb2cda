// src/models/short_link.rs - Pure data structures
use serde::{Deserialize, Serialize};
use validator::Validate;

// DTO for creating a new short link
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct CreateShortLinkDto {
    // Presence only; the value is stored exactly as sent
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}

impl CreateShortLinkDto {
    /// Consumes a validated DTO and yields the target URL
    pub fn into_url(self) -> String {
        self.url.unwrap_or_default()
    }
}

/// A stored mapping from short id to target URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// Store key, lowercase hex
    pub id: String,

    /// The original, long URL; the store value
    pub target_url: String,
}

impl ShortLink {
    pub fn new(id: String, target_url: String) -> Self {
        Self { id, target_url }
    }

    /// Public short URL for this link under the given origin
    pub fn short_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.id)
    }
}

// DTO for the shorten response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkResponseDto {
    pub short_url: String,
}
