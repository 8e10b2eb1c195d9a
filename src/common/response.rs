use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A JSON body paired with the HTTP status it is sent with
///
/// Handlers return this instead of a bare `Json<T>` so that creation
/// endpoints can answer with `201 Created` through the same type.
///
/// # Example
/// ```
/// use product_store::common::response::{ApiResponse, MessageBody};
///
/// let response = ApiResponse::ok(MessageBody::new("Product deleted"));
/// assert_eq!(response.http_status, axum::http::StatusCode::OK);
/// ```
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub body: T,
    pub http_status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Respond with HTTP 200 OK.
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// Respond with HTTP 201 Created.
    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(http_status: StatusCode, body: T) -> Self {
        Self { body, http_status }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.http_status, Json(self.body)).into_response()
    }
}

/// `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{"errors": ["...", ...]}`
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<String>,
}

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
