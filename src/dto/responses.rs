use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// The uniform wrapper on every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// Public view of a user; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Author identity joined onto post views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Whether the requesting (possibly anonymous) caller wrote this post.
    pub is_author: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            current_page: page,
            total_pages: total.div_ceil(limit),
            total_posts: total,
            has_next_page: page.saturating_mul(limit) < total,
            has_prev_page: page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthData {
    pub user: UserView,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserData {
    pub user: UserView,
}

#[derive(Debug, Serialize)]
pub struct PostData {
    pub post: PostView,
}

#[derive(Debug, Serialize)]
pub struct PostListData {
    pub posts: Vec<PostView>,
    pub pagination: PageMeta,
}
