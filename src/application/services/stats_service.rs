//! Click statistics aggregation service.

use std::sync::Arc;

use crate::domain::entities::{ClickEvent, ShortLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// How many recent click events a stats query returns at most.
pub const RECENT_EVENTS_LIMIT: i64 = 50;

/// Aggregated statistics for one short link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: ShortLink,
    /// Count of all recorded clicks, unbounded.
    pub total_clicks: i64,
    /// Up to [`RECENT_EVENTS_LIMIT`] most recent events, newest first.
    pub recent: Vec<ClickEvent>,
}

/// Service reading link metadata together with its click history.
pub struct StatsService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Returns metadata, total click count, and recent events for `code`.
    ///
    /// Expiration does not hide a link from stats: an expired link keeps its
    /// history queryable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link with this code exists,
    /// [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found", json!({ "code": code })))?;

        let total_clicks = self.click_repository.count_by_code(code).await?;
        let recent = self
            .click_repository
            .recent_by_code(code, RECENT_EVENTS_LIMIT)
            .await?;

        Ok(LinkStats {
            link,
            total_clicks,
            recent,
        })
    }
}
