use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Every failure a request can surface, mapped onto the response envelope.
///
/// Domain errors carry the exact user-facing message as their `Display`
/// text; internal errors log the detail and answer with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User with this email already exists")]
    DuplicateEmail,
    #[error("Email is already taken by another user")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authorized")]
    Unauthorized,
    #[error("Not authorized, you can only modify your own posts")]
    Forbidden,
    #[error("Post not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Too many requests, please try again later")]
    TooManyRequests,
    #[error("Internal server error")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmail | ApiError::EmailTaken | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Hash(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Hash(e) => error!("Password hashing failed: {}", e),
            ApiError::Internal(msg) => error!("Internal error: {}", msg),
            _ => {}
        }

        (
            self.status(),
            Json(serde_json::json!({
              "success": false,
              "error": self.to_string(),
            })),
        )
            .into_response()
    }
}
