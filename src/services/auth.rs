use tracing::info;
use uuid::Uuid;

use crate::dto::{AuthData, LoginRequest, RegisterRequest, UpdateProfileRequest, UserView};
use crate::errors::ApiError;
use crate::state::AppState;

/// Create the account and log it straight in.
pub fn register(state: &AppState, payload: RegisterRequest) -> Result<AuthData, ApiError> {
    let user = state
        .users
        .create(&payload.name, &payload.email, &payload.password)?;
    let token = state.tokens.issue(user.id)?;

    info!("New user registered: {}", user.email);

    Ok(AuthData {
        user: user.into(),
        token,
    })
}

/// Unknown email and wrong password produce the identical error, so a
/// caller cannot probe which one failed.
pub fn login(state: &AppState, payload: LoginRequest) -> Result<AuthData, ApiError> {
    let user = state
        .users
        .find_by_email(&payload.email)
        .ok_or(ApiError::InvalidCredentials)?;

    if !state.users.verify_password(&user, &payload.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;

    info!("User logged in: {}", user.email);

    Ok(AuthData {
        user: user.into(),
        token,
    })
}

pub fn update_profile(
    state: &AppState,
    user_id: Uuid,
    payload: UpdateProfileRequest,
) -> Result<UserView, ApiError> {
    let user = state.users.update_profile(
        user_id,
        payload.name.as_deref(),
        payload.email.as_deref(),
    )?;

    info!("Profile updated: {}", user.id);

    Ok(user.into())
}
