//! Click entity representing a single redirect resolution.

use chrono::{DateTime, Utc};

/// A click event recorded when a short link resolves.
///
/// Append-only: never mutated or deleted after creation. The `code` field is
/// a plain string reference with no enforced foreign key, so an event may
/// outlive (or never match) a link row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickEvent {
    pub id: i64,
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    pub country_hint: Option<String>,
}

/// Input data for appending a new click event.
///
/// All client metadata is optional to handle missing headers gracefully.
/// The `id` is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewClickEvent {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    pub country_hint: Option<String>,
}

/// Request-side click metadata captured by the redirect handler.
#[derive(Debug, Clone, Default)]
pub struct ClickContext {
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    pub country_hint: Option<String>,
}

impl ClickContext {
    /// Stamps the context into a storable event for `code` at `clicked_at`.
    pub fn into_event(self, code: String, clicked_at: DateTime<Utc>) -> NewClickEvent {
        NewClickEvent {
            code,
            clicked_at,
            referer: self.referer,
            user_agent: self.user_agent,
            ip: self.ip,
            country_hint: self.country_hint,
        }
    }
}
