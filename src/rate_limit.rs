use std::num::NonZeroU32;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::errors::ApiError;

pub type AppRateLimiter = Arc<DefaultDirectRateLimiter>;

/// Process-wide request limiter; excess traffic answers 429.
pub fn limiter(per_minute: u32) -> AppRateLimiter {
    let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

pub async fn throttle(
    State(limiter): State<AppRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.check().is_err() {
        return ApiError::TooManyRequests.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_is_enforced() {
        let limiter = limiter(2);
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[test]
    fn zero_config_degrades_to_one_per_minute() {
        let limiter = limiter(0);
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
