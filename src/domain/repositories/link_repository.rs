//! Repository trait for short link storage.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert-if-absent attempt.
///
/// `CodeTaken` is a normal outcome, not an error: the allocator decides
/// whether it means a retry (generated codes) or a conflict (custom codes).
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The row was inserted; carries the stored link.
    Inserted(ShortLink),
    /// Another link already owns this code.
    CodeTaken,
}

/// Repository interface for short link storage.
///
/// Deliberately narrow: links are insert-only and immutable, so no update or
/// delete is exposed. Uniqueness of `code` is enforced by the storage layer
/// itself: `insert_if_absent` is atomic with respect to concurrent inserts
/// of the same code, so at most one of N racing attempts succeeds.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory, for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link unless its code is already claimed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. A duplicate code is
    /// reported as [`InsertOutcome::CodeTaken`], not as an error.
    async fn insert_if_absent(&self, link: NewShortLink) -> Result<InsertOutcome, AppError>;

    /// Looks up a link by its short code.
    ///
    /// Returns `Ok(None)` if no link with this code exists. Expired links are
    /// returned as-is; expiry is evaluated by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;
}
