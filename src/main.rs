use axum::middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blog_api::{AppConfig, AppState, rate_limit, router};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let state = AppState::new(&config);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let limiter = rate_limit::limiter(config.rate_limit_per_minute);

    let app = router(state)
        .layer(middleware::from_fn_with_state(limiter, rate_limit::throttle))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  POST   /auth/register    - Create account");
    info!("  POST   /auth/login       - Login");
    info!("  GET    /auth/me          - Current user (auth)");
    info!("  PUT    /auth/profile     - Update name/email (auth)");
    info!("  GET    /posts            - List posts (paginated, searchable)");
    info!("  GET    /posts/:id        - Get post + isAuthor flag");
    info!("  POST   /posts            - Create post (auth)");
    info!("  PUT    /posts/:id        - Update post (auth, owner only)");
    info!("  DELETE /posts/:id        - Delete post (auth, owner only)");
    info!("  GET    /posts/user/me    - Caller's own posts (auth)");

    axum::serve(listener, app).await.expect("server error");
}
