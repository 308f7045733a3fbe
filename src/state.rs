use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::store::{PostStore, UserStore};

/// Shared application state; cheap to clone, handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub posts: PostStore,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            users: UserStore::new(config.bcrypt_cost),
            posts: PostStore::new(),
            tokens: TokenService::new(config.jwt_secret.clone(), config.token_ttl),
        }
    }
}
