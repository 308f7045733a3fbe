use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::errors::ApiError;
use crate::models::User;
use crate::state::AppState;

/// Required authentication: the handler only runs for a valid bearer token
/// whose user still exists. Missing token, bad token and vanished user all
/// reject with the same `Unauthorized`.
pub struct AuthUser(pub User);

/// Optional authentication: read endpoints that personalize output use this
/// to learn who is asking without forcing a login. Every token failure
/// degrades silently to an anonymous request.
pub struct OptionalUser(pub Option<User>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn resolve_user(parts: &Parts, state: &AppState) -> Result<User, ApiError> {
    let token = bearer_token(parts).ok_or(ApiError::Unauthorized)?;
    let user_id = state.tokens.verify(token)?;
    state.users.find_by_id(user_id).ok_or(ApiError::Unauthorized)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(parts, state).map(AuthUser)
    }
}

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(resolve_user(parts, state).ok()))
    }
}
