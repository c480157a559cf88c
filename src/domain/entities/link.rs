//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its validity window.
///
/// The `code` is globally unique and immutable once assigned. A link with
/// `expires_at = None` never expires.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_custom: bool,
}

impl ShortLink {
    /// Returns true if the validity window has passed at `now`.
    ///
    /// Expiration is a read-time predicate: the row itself is never mutated
    /// or swept, callers evaluate this against their own clock.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now > e)
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_custom: bool,
}
