//! Request extractors with API-shaped rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde_json::json;

use crate::error::AppError;

/// JSON body extractor that rejects malformed bodies as [`AppError`].
///
/// Axum's plain [`Json`] rejection answers with a `422` and a plain-text
/// body; a missing or mistyped field is a validation failure here, so it
/// has to come back as a `400` in the usual error envelope.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                "Invalid request body",
                json!({ "cause": rejection.body_text() }),
            )
        })?;

        Ok(Self(value))
    }
}
