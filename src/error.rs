use crate::common::response::{ErrorBody, ValidationErrorBody};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid id: {0}")]
    InvalidIdentifier(String),

    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    #[error("Product not found: {id}")]
    NotFound { id: i64 },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl StoreError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::InvalidIdentifier(_)
            | StoreError::ValidationFailed(_)
            | StoreError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Storage(_)
            | StoreError::DependencyNotFound { .. }
            | StoreError::DowncastFailed { .. }
            | StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            StoreError::ValidationFailed(errors) => {
                (status, axum::Json(ValidationErrorBody { errors })).into_response()
            }
            StoreError::InvalidIdentifier(raw) => {
                tracing::debug!("Rejected identifier {:?}", raw);
                (status, axum::Json(ErrorBody::new("Invalid id"))).into_response()
            }
            StoreError::NotFound { .. } => {
                (status, axum::Json(ErrorBody::new("Product not found"))).into_response()
            }
            StoreError::MalformedBody(reason) => {
                tracing::debug!("Rejected request body: {}", reason);
                (status, axum::Json(ErrorBody::new("Invalid JSON body"))).into_response()
            }
            // Storage detail stays in the logs.
            StoreError::Storage(detail) => {
                tracing::error!("Storage failure: {}", detail);
                (status, axum::Json(ErrorBody::new("Database error"))).into_response()
            }
            other => {
                tracing::error!("Request failed: {}", other);
                (status, axum::Json(ErrorBody::new("Internal server error"))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_storage_error_hides_detail() {
        let response = StoreError::Storage("disk I/O error at page 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Database error" })
        );
    }

    #[tokio::test]
    async fn test_validation_error_lists_messages() {
        let response = StoreError::ValidationFailed(vec![
            "Invalid name".to_string(),
            "Invalid price".to_string(),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "errors": ["Invalid name", "Invalid price"] })
        );
    }

    #[tokio::test]
    async fn test_not_found_and_invalid_id_bodies() {
        let response = StoreError::NotFound { id: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Product not found" })
        );

        let response = StoreError::InvalidIdentifier("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Invalid id" })
        );
    }
}
