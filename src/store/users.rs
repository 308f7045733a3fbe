use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::User;

/// Credential store backed by in-process maps.
///
/// Emails are normalized to lowercase before they touch the index, so
/// uniqueness and lookups are case-insensitive.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<DashMap<Uuid, User>>,
    email_index: Arc<DashMap<String, Uuid>>,
    hash_cost: u32,
}

impl UserStore {
    pub fn new(hash_cost: u32) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            email_index: Arc::new(DashMap::new()),
            hash_cost,
        }
    }

    /// Register a new user, hashing the password before storage.
    pub fn create(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let email = normalize(email);

        // Hash outside the index lock; bcrypt is deliberately slow.
        let user = User {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: email.clone(),
            password_hash: bcrypt::hash(password, self.hash_cost)?,
            created_at: Utc::now(),
        };

        // Reserving the index slot first keeps concurrent registrations of
        // the same email from both succeeding.
        match self.email_index.entry(email) {
            Entry::Occupied(_) => return Err(ApiError::DuplicateEmail),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        self.users.insert(user.id, user.clone());

        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.email_index.get(&normalize(email))?;
        self.users.get(&id).map(|user| user.clone())
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|user| user.clone())
    }

    /// Check a candidate password against the stored hash.
    pub fn verify_password(&self, user: &User, candidate: &str) -> Result<bool, ApiError> {
        Ok(bcrypt::verify(candidate, &user.password_hash)?)
    }

    /// Update name and/or email independently. An email change re-checks
    /// uniqueness against every other account.
    pub fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<User, ApiError> {
        let mut user = self.users.get_mut(&id).ok_or(ApiError::Unauthorized)?;

        if let Some(new_email) = email {
            let normalized = normalize(new_email);
            if normalized != user.email {
                match self.email_index.entry(normalized.clone()) {
                    Entry::Occupied(_) => return Err(ApiError::EmailTaken),
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
                self.email_index.remove(&user.email);
                user.email = normalized;
            }
        }

        if let Some(new_name) = name {
            user.name = new_name.trim().to_string();
        }

        Ok(user.clone())
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
