//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::HttpError;

/// Item id from the `{id}` path segment. Anything but an integer is a 404,
/// the same as an unknown id.
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::NotFound)?;

        let id = id.parse::<i64>().map_err(|_| HttpError::NotFound)?;
        Ok(Self(id))
    }
}
