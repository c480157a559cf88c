//! Target URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that `raw` is a syntactically valid absolute http(s) URL.
///
/// Validation only; the stored value stays the caller's original string,
/// not the parser's re-serialization.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL does not parse or uses a
/// scheme other than `http` / `https`.
pub fn validate_target_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request(
            "Invalid or missing url",
            json!({ "field": "url", "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Invalid or missing url",
            json!({ "field": "url", "scheme": parsed.scheme() }),
        ));
    }

    Ok(())
}
