//! JSON extractor with validation through the `validator` crate.

use crate::errors::{AppError, NULL_FIELD_MESSAGE};
use axum::extract::{FromRequest, Json, Request};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

/// Deserializes the body as JSON and runs [`Validate::validate`] on it.
///
/// Syntax errors and a missing `Content-Type` reject as `INVALID_JSON`. A body
/// that parses but does not fit `T` (missing field, `null`, wrong type) and a
/// failed [`Validate`] both reject as `VALIDATION_ERROR` with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(max = 255))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     payload.name
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let data: T = serde_path_to_error::deserialize(value)?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

/// `deserialize_with` helper for fields that may be omitted but not sent as `null`.
///
/// Pair it with `#[serde(default)]` so an absent field stays `None`:
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct UpdateItem {
///     #[serde(default, deserialize_with = "axum_helpers::non_null")]
///     name: Option<String>,
/// }
/// ```
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| D::Error::custom(NULL_FIELD_MESSAGE))
}
