//! In-memory repository implementations.
//!
//! Back the handler-level tests without a running database. Semantics mirror
//! the PostgreSQL implementations: insert-if-absent on the code key, ids
//! assigned in increasing order, recent reads newest first.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{ClickEvent, NewClickEvent, NewShortLink, ShortLink};
use crate::domain::repositories::{ClickRepository, InsertOutcome, LinkRepository};
use crate::error::AppError;

/// In-memory link store keyed by code.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a link directly, bypassing allocation. Test setup helper.
    pub fn seed(&self, link: ShortLink) {
        self.links
            .lock()
            .expect("lock poisoned")
            .insert(link.code.clone(), link);
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let mut links = self.links.lock().expect("lock poisoned");

        if links.contains_key(&link.code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let stored = ShortLink {
            code: link.code.clone(),
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            is_custom: link.is_custom,
        };
        links.insert(link.code, stored.clone());

        Ok(InsertOutcome::Inserted(stored))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.lock().expect("lock poisoned").get(code).cloned())
    }
}

/// In-memory append-only click log.
#[derive(Debug, Default)]
pub struct MemoryClickRepository {
    events: Mutex<Vec<ClickEvent>>,
}

impl MemoryClickRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn append(&self, event: NewClickEvent) -> Result<ClickEvent, AppError> {
        let mut events = self.events.lock().expect("lock poisoned");

        let stored = ClickEvent {
            id: events.len() as i64 + 1,
            code: event.code,
            clicked_at: event.clicked_at,
            referer: event.referer,
            user_agent: event.user_agent,
            ip: event.ip,
            country_hint: event.country_hint,
        };
        events.push(stored.clone());

        Ok(stored)
    }

    async fn count_by_code(&self, code: &str) -> Result<i64, AppError> {
        let events = self.events.lock().expect("lock poisoned");
        Ok(events.iter().filter(|e| e.code == code).count() as i64)
    }

    async fn recent_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let events = self.events.lock().expect("lock poisoned");
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.code == code)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClickContext;
    use chrono::Utc;

    fn new_link(code: &str) -> NewShortLink {
        NewShortLink {
            code: code.to_string(),
            original_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at: None,
            is_custom: false,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = MemoryLinkRepository::new();

        let outcome = repo.insert_if_absent(new_link("abc123")).await.unwrap();
        assert!(matches!(outcome, InsertOutcome::Inserted(_)));

        let found = repo.find_by_code("abc123").await.unwrap();
        assert_eq!(found.unwrap().original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_duplicate_insert_reports_code_taken() {
        let repo = MemoryLinkRepository::new();

        repo.insert_if_absent(new_link("abc123")).await.unwrap();
        let second = repo.insert_if_absent(new_link("abc123")).await.unwrap();

        assert!(matches!(second, InsertOutcome::CodeTaken));
    }

    #[tokio::test]
    async fn test_find_unknown_code() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_code("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_click_ids_increase() {
        let repo = MemoryClickRepository::new();

        for _ in 0..3 {
            repo.append(ClickContext::default().into_event("c".to_string(), Utc::now()))
                .await
                .unwrap();
        }

        let events = repo.recent_by_code("c", 50).await.unwrap();
        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_recent_respects_limit_and_code_filter() {
        let repo = MemoryClickRepository::new();

        for i in 0..10 {
            let code = if i % 2 == 0 { "even" } else { "odd" };
            repo.append(ClickContext::default().into_event(code.to_string(), Utc::now()))
                .await
                .unwrap();
        }

        let recent = repo.recent_by_code("even", 3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.iter().all(|e| e.code == "even"));
        assert!(recent.windows(2).all(|w| w[0].id > w[1].id));

        assert_eq!(repo.count_by_code("even").await.unwrap(), 5);
        assert_eq!(repo.count_by_code("odd").await.unwrap(), 5);
    }
}
