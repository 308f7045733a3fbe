use chrono::Duration;

/// Runtime configuration, collected from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    /// Lifetime of issued bearer tokens.
    pub token_ttl: Duration,
    pub rate_limit_per_minute: u32,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Read configuration from the environment. `JWT_SECRET` is mandatory;
    /// everything else falls back to a sensible default.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!");

        Self {
            port: env_or("PORT", 3000),
            jwt_secret,
            token_ttl: Duration::days(env_or("JWT_EXPIRES_IN_DAYS", 7)),
            rate_limit_per_minute: env_or("RATE_LIMIT_PER_MINUTE", 100),
            bcrypt_cost: env_or("BCRYPT_COST", bcrypt::DEFAULT_COST),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
