//! Shortcode allocation service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{CodePolicy, validate_custom_code};
use crate::utils::url_validator::validate_target_url;
use chrono::{Duration, Utc};
use serde_json::json;

/// Service allocating unique short codes for new links.
///
/// Validates input at the boundary, then either claims a caller-supplied
/// custom code with a single insert attempt, or draws generated codes under
/// the configured [`CodePolicy`] with bounded retry on collision.
///
/// Every attempt is one atomic `insert_if_absent`: uniqueness is enforced by
/// the storage layer, never by a prior existence check, so two racing
/// allocators cannot both claim the same code.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    code_policy: CodePolicy,
}

impl LinkService {
    /// Creates a new link service with the default generation policy.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self::with_policy(link_repository, CodePolicy::default())
    }

    /// Creates a new link service with an explicit generation policy.
    pub fn with_policy(link_repository: Arc<dyn LinkRepository>, code_policy: CodePolicy) -> Self {
        Self {
            link_repository,
            code_policy,
        }
    }

    /// Allocates a short link for `original_url`.
    ///
    /// # Arguments
    ///
    /// - `original_url` - target, must be an absolute http(s) URL
    /// - `validity_minutes` - optional validity window; the link expires
    ///   `validity_minutes` after creation. Must be positive when present.
    /// - `custom_code` - optional caller-chosen code (`[0-9a-zA-Z_-]{3,20}`)
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - malformed URL, code, or validity
    /// - [`AppError::Conflict`] - custom code already claimed (no retry; the
    ///   caller explicitly chose this identity)
    /// - [`AppError::Internal`] - generated-code collisions exhausted the
    ///   retry budget, or a storage failure
    pub async fn create_short_link(
        &self,
        original_url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        validate_target_url(&original_url)?;

        let created_at = Utc::now();
        let expires_at = match validity_minutes {
            None => None,
            Some(minutes) => {
                if minutes <= 0 {
                    return Err(AppError::bad_request(
                        "validity must be a positive number of minutes",
                        json!({ "field": "validity", "value": minutes }),
                    ));
                }
                // Bounds-checked: Duration::minutes would panic on huge values.
                let expiry = Duration::try_minutes(minutes)
                    .and_then(|window| created_at.checked_add_signed(window))
                    .ok_or_else(|| {
                        AppError::bad_request(
                            "validity is out of range",
                            json!({ "field": "validity", "value": minutes }),
                        )
                    })?;
                Some(expiry)
            }
        };

        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            let outcome = self
                .link_repository
                .insert_if_absent(NewShortLink {
                    code: code.clone(),
                    original_url,
                    created_at,
                    expires_at,
                    is_custom: true,
                })
                .await?;

            return match outcome {
                InsertOutcome::Inserted(link) => Ok(link),
                InsertOutcome::CodeTaken => Err(AppError::conflict(
                    "Shortcode already exists",
                    json!({ "shortcode": code }),
                )),
            };
        }

        for attempt in 1..=self.code_policy.max_attempts {
            let code = self.code_policy.draw(&mut rand::rng());

            let outcome = self
                .link_repository
                .insert_if_absent(NewShortLink {
                    code,
                    original_url: original_url.clone(),
                    created_at,
                    expires_at,
                    is_custom: false,
                })
                .await?;

            match outcome {
                InsertOutcome::Inserted(link) => return Ok(link),
                InsertOutcome::CodeTaken => {
                    tracing::warn!(attempt, "generated code collision, redrawing");
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "attempts": self.code_policy.max_attempts }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn stored(link: &NewShortLink) -> ShortLink {
        ShortLink {
            code: link.code.clone(),
            original_url: link.original_url.clone(),
            created_at: link.created_at,
            expires_at: link.expires_at,
            is_custom: link.is_custom,
        }
    }

    #[tokio::test]
    async fn test_generated_code_success() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .times(1)
            .returning(|link| Ok(InsertOutcome::Inserted(stored(&link))));

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 6);
        assert!(!link.is_custom);
        assert!(link.expires_at.is_none());
    }

    #[tokio::test]
    async fn test_validity_sets_expiry_after_creation() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .times(1)
            .returning(|link| Ok(InsertOutcome::Inserted(stored(&link))));

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com".to_string(), Some(30), None)
            .await
            .unwrap();

        let expires_at = link.expires_at.unwrap();
        assert_eq!(expires_at, link.created_at + Duration::minutes(30));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_storage() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent().times(0);

        let service = LinkService::new(Arc::new(repo));
        let err = service
            .create_short_link("not-a-url".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_non_positive_validity_rejected() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent().times(0);

        let service = LinkService::new(Arc::new(repo));

        for minutes in [0, -5] {
            let err = service
                .create_short_link("https://example.com".to_string(), Some(minutes), None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_out_of_range_validity_rejected() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent().times(0);

        let service = LinkService::new(Arc::new(repo));

        for minutes in [i64::MAX, i64::MAX / 60 + 1] {
            let err = service
                .create_short_link("https://example.com".to_string(), Some(minutes), None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_invalid_custom_code_rejected_before_storage() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent().times(0);

        let service = LinkService::new(Arc::new(repo));
        let err = service
            .create_short_link(
                "https://example.com".to_string(),
                None,
                Some("a!".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_custom_code_single_attempt_conflict() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .withf(|link| link.code == "promo" && link.is_custom)
            .times(1)
            .returning(|_| Ok(InsertOutcome::CodeTaken));

        let service = LinkService::new(Arc::new(repo));
        let err = service
            .create_short_link(
                "https://example.com".to_string(),
                None,
                Some("promo".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_collision() {
        let mut repo = MockLinkRepository::new();
        let mut calls = 0;
        repo.expect_insert_if_absent()
            .times(2)
            .returning_st(move |link| {
                calls += 1;
                if calls == 1 {
                    Ok(InsertOutcome::CodeTaken)
                } else {
                    Ok(InsertOutcome::Inserted(stored(&link)))
                }
            });

        let service = LinkService::new(Arc::new(repo));
        let result = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_exhausts_retry_budget() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .times(3)
            .returning(|_| Ok(InsertOutcome::CodeTaken));

        let service = LinkService::new(Arc::new(repo));
        let err = service
            .create_short_link("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_custom_code_records_validity() {
        let before = Utc::now();

        let mut repo = MockLinkRepository::new();
        repo.expect_insert_if_absent()
            .withf(move |link| {
                link.is_custom
                    && link
                        .expires_at
                        .is_some_and(|e| e >= before + Duration::minutes(1))
            })
            .times(1)
            .returning(|link| Ok(InsertOutcome::Inserted(stored(&link))));

        let service = LinkService::new(Arc::new(repo));
        let link = service
            .create_short_link(
                "https://example.com".to_string(),
                Some(1),
                Some("promo".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "promo");
    }
}
