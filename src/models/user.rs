use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Registered account. The password is only ever stored as a bcrypt hash
/// and never leaves the process in any serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lowercased; lookups are case-insensitive.
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
