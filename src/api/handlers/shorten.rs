//! Handler for short link creation.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::extractors::AppJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_host;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo"     // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the full short link and its expiry (null when the link
/// never expires). The short link host is taken from the request's Host
/// header, not from configuration.
///
/// # Errors
///
/// - 400 - malformed body, invalid URL, shortcode format, or validity
/// - 409 - custom shortcode already claimed
/// - 500 - generated-code collisions exhausted the retry budget
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let host = request_host(&headers)?;

    let link = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let response = CreateShortUrlResponse {
        short_link: format!("http://{}/{}", host, link.code),
        expiry: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
