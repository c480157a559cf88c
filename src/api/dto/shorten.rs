//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten (must be absolute http/https).
    pub url: String,
    /// Optional validity window in minutes; the link expires this long after
    /// creation. Omitted = never expires.
    pub validity: Option<i64>,
    /// Optional caller-chosen shortcode.
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Full short URL, composed from the request's Host header.
    pub short_link: String,
    /// Expiration timestamp, or null for a permanent link.
    pub expiry: Option<DateTime<Utc>>,
}
