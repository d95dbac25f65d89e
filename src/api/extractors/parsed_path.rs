//! Path extractor that reports malformed segments in the JSON error envelope.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// `Path` wrapper whose rejection is `AppError::BadRequest` (400), so ids
/// that are not numbers or do not fit an `i32` get the same body as every
/// other error.
pub struct ParsedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ParsedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(ParsedPath(value))
    }
}
