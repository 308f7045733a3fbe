use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A blog post. The author reference is fixed at creation; only title and
/// content are mutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}
