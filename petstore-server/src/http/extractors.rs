//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{PetId, ValidationError};

/// Extract a pet id from the `{id}` path segment.
///
/// A blank segment is a 400. Anything that is not a UUID cannot name a
/// stored pet, so it is a 404 without a round trip to the store.
pub struct PetIdParam(pub PetId);

impl<S> FromRequestParts<S> for PetIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::MissingId))?;

        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::Validation(ValidationError::MissingId));
        }

        id.parse::<PetId>()
            .map(Self)
            .map_err(|_| ApiError::PetNotFound)
    }
}
