//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for short link storage.
///
/// `insert_if_absent` relies on the unique constraint on `short_links.code`:
/// `ON CONFLICT (code) DO NOTHING` makes the insert atomic under concurrent
/// attempts with no check-then-insert window.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO short_links (code, original_url, created_at, expires_at, is_custom)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, original_url, created_at, expires_at, is_custom
            "#,
        )
        .bind(&link.code)
        .bind(&link.original_url)
        .bind(link.created_at)
        .bind(link.expires_at)
        .bind(link.is_custom)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(match row {
            Some(stored) => InsertOutcome::Inserted(stored),
            None => InsertOutcome::CodeTaken,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT code, original_url, created_at, expires_at, is_custom
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }
}
