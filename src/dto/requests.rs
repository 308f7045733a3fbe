use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Required text fields are trimmed before storage, so a whitespace-only
/// value would otherwise sneak past the length check and land empty.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(Cow::Borrowed("cannot be blank"));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Validate, Deserialize)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = not_blank)
    )]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 100, message = "Password must be 8-100 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct UpdateProfileRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = not_blank)
    )]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title cannot be more than 200 characters"),
        custom(function = not_blank)
    )]
    pub title: String,
    #[validate(
        length(min = 1, message = "Content is required"),
        custom(function = not_blank)
    )]
    pub content: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct UpdatePostRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title cannot be more than 200 characters"),
        custom(function = not_blank)
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, message = "Content is required"),
        custom(function = not_blank)
    )]
    pub content: Option<String>,
}

/// Query parameters for the paginated listings.
#[derive(Debug, Deserialize)]
pub struct PostQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub search: Option<String>,
}

fn default_page() -> usize {
    1
}
fn default_limit() -> usize {
    10
}
