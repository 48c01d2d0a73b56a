//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": ...}` JSON bodies. Store faults are
//! logged here and never leak details to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "NOT FOUND";
pub const PET_NOT_FOUND_MESSAGE: &str = "Pet not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Pet does not exist (404)
    PetNotFound,

    /// No route for this method and path (404)
    RouteNotFound,

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    fn client_message(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingId) => "Invalid request: Missing pet ID",
            Self::Validation(_) => "Invalid request body",
            Self::PetNotFound => PET_NOT_FOUND_MESSAGE,
            Self::RouteNotFound => ROUTE_NOT_FOUND_MESSAGE,
            Self::Database(_) | Self::Internal { .. } => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PetNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::warn!("Rejected request: {}", e),
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::PetNotFound | Self::RouteNotFound => {}
        }

        let body = json!({ "error": self.client_message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing { field: "age" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid request body" }));
    }

    #[tokio::test]
    async fn missing_id_is_400() {
        let response = ApiError::Validation(ValidationError::MissingId).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Invalid request: Missing pet ID" })
        );
    }

    #[tokio::test]
    async fn pet_not_found_is_404() {
        let response = ApiError::PetNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "Pet not found" }));
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal Server Error" })
        );
    }
}
