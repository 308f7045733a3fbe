//! Blog publishing API: registration, JWT auth, and ownership-checked
//! CRUD over a searchable, paginated post collection.

pub mod auth;
pub mod client;
pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post, put};

/// Build the application router. Middleware (CORS, tracing, rate limiting)
/// is layered on by the binary so tests can drive the bare routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public routes
        .route("/health", get(routes::health::health_check))
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        // Authenticated routes
        .route("/auth/me", get(routes::auth::me))
        .route("/auth/profile", put(routes::auth::update_profile))
        .route("/posts/user/me", get(routes::posts::my_posts))
        // Optional-auth reads plus owner-gated mutations
        .route(
            "/posts",
            get(routes::posts::list_posts).post(routes::posts::create_post),
        )
        .route(
            "/posts/{id}",
            get(routes::posts::get_post)
                .put(routes::posts::update_post)
                .delete(routes::posts::delete_post),
        )
        .fallback(routes::fallback)
        .with_state(state)
}
