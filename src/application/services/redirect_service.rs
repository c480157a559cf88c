//! Redirect resolution and click recording service.

use std::sync::Arc;

use crate::domain::entities::{ClickContext, ShortLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;

/// Policy for a click-recording failure during a redirect.
///
/// Resolution and recording are two distinct steps; this decides whether a
/// failed analytics write also fails a redirect that would otherwise have
/// succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickFailurePolicy {
    /// The recording failure becomes the resolution's failure.
    #[default]
    Propagate,
    /// The failure is logged and the redirect proceeds.
    Tolerate,
}

/// Service resolving short codes to their target URLs.
///
/// Resolution is a pure read plus an expiration check; on success a click
/// event is appended before the caller is handed the target URL. The two
/// steps are not transactional: a crash in between yields a redirect with no
/// recorded click (at-most-once recording).
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
    click_repository: Arc<dyn ClickRepository>,
    failure_policy: ClickFailurePolicy,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
        failure_policy: ClickFailurePolicy,
    ) -> Self {
        Self {
            link_repository,
            click_repository,
            failure_policy,
        }
    }

    /// Resolves `code` to its link, enforcing the validity window.
    ///
    /// Pure read: no click is recorded. Expired rows are left in place;
    /// expiration is evaluated against this call's wall clock.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - no link with this code
    /// - [`AppError::Expired`] - validity window has passed
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("shortcode not found", json!({ "code": code })))?;

        if link.is_expired_at(Utc::now()) {
            return Err(AppError::gone(
                "short link expired",
                json!({ "code": code, "expiredAt": link.expires_at }),
            ));
        }

        Ok(link)
    }

    /// Appends a click event for `code` with the given request context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn record_click(&self, code: &str, context: ClickContext) -> Result<(), AppError> {
        self.click_repository
            .append(context.into_event(code.to_string(), Utc::now()))
            .await?;
        Ok(())
    }

    /// Resolves `code` and records the click, returning the target URL.
    ///
    /// The click is written before the caller learns the resolution
    /// succeeded. A recording failure is handled per the configured
    /// [`ClickFailurePolicy`]; not-found and expired resolutions never record
    /// anything.
    pub async fn resolve_and_record(
        &self,
        code: &str,
        context: ClickContext,
    ) -> Result<String, AppError> {
        let link = self.resolve(code).await?;

        if let Err(e) = self.record_click(code, context).await {
            match self.failure_policy {
                ClickFailurePolicy::Propagate => return Err(e),
                ClickFailurePolicy::Tolerate => {
                    tracing::warn!(code, "click recording failed, redirect proceeds");
                }
            }
        }

        Ok(link.original_url)
    }
}
