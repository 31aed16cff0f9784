//! Integer primary-key path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extracts a single `i64` id from the path.
///
/// A segment that is not an integer cannot name an existing row, so it is
/// answered with 404 rather than a parse error.
///
/// ```ignore
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item {id}")
/// }
///
/// let app = Router::new().route("/Item/{id}/", get(get_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::NotFound(format!("No resource with id '{raw}'")))
    }
}
