//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for the append-only click log.
///
/// Ids come from a `BIGSERIAL` column, so insertion order and id order agree
/// and "recent" reads can sort by id.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, event: NewClickEvent) -> Result<ClickEvent, AppError> {
        sqlx::query_as::<_, ClickEvent>(
            r#"
            INSERT INTO click_events (code, clicked_at, referer, user_agent, ip, country_hint)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, code, clicked_at, referer, user_agent, ip, country_hint
            "#,
        )
        .bind(&event.code)
        .bind(event.clicked_at)
        .bind(&event.referer)
        .bind(&event.user_agent)
        .bind(&event.ip)
        .bind(&event.country_hint)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn count_by_code(&self, code: &str) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM click_events WHERE code = $1")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn recent_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        sqlx::query_as::<_, ClickEvent>(
            r#"
            SELECT id, code, clicked_at, referer, user_agent, ip, country_hint
            FROM click_events
            WHERE code = $1
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }
}
