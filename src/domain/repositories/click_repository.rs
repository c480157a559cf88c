//! Repository trait for click event storage and aggregation.

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only click log.
///
/// Pure append plus two read shapes for stats. Events are never validated
/// against the link table: recording a click for a nonexistent or expired
/// code succeeds (the redirect path only appends after a successful,
/// non-expired lookup, but that ordering is the caller's concern).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - in-memory, for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event, assigning a monotonically increasing id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append(&self, event: NewClickEvent) -> Result<ClickEvent, AppError>;

    /// Counts all recorded clicks for `code`. Unbounded, no cap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count_by_code(&self, code: &str) -> Result<i64, AppError>;

    /// Returns up to `limit` most recent clicks for `code`, newest first.
    ///
    /// Ordered by descending id, which tracks insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn recent_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError>;
}
