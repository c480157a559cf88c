//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkStats;
use crate::domain::entities::ClickEvent;

/// Statistics for one short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub recent: Vec<RecentClick>,
}

/// One recent click event as exposed by the stats view.
///
/// User agent and IP are retained in storage but deliberately not exposed
/// here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentClick {
    pub clicked_at: DateTime<Utc>,
    pub referer: Option<String>,
    pub country_hint: Option<String>,
}

impl From<ClickEvent> for RecentClick {
    fn from(event: ClickEvent) -> Self {
        Self {
            clicked_at: event.clicked_at,
            referer: event.referer,
            country_hint: event.country_hint,
        }
    }
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            shortcode: stats.link.code,
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            clicks: stats.total_clicks,
            recent: stats.recent.into_iter().map(RecentClick::from).collect(),
        }
    }
}
