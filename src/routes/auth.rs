use axum::{Json, extract::State, http::StatusCode};

use crate::auth::AuthUser;
use crate::dto::{
    ApiResponse, AuthData, LoginRequest, RegisterRequest, UpdateProfileRequest, UserData,
};
use crate::errors::ApiError;
use crate::extract::ValidatedJson;
use crate::services;
use crate::state::AppState;

/// POST /auth/register
/// Body: { "name": "...", "email": "...", "password": "..." }
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    let data = services::auth::register(&state, payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User registered successfully", data)),
    ))
}

/// POST /auth/login
/// Body: { "email": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    let data = services::auth::login(&state, payload)?;

    Ok(Json(ApiResponse::with_message("Login successful", data)))
}

/// GET /auth/me
/// Headers: Authorization: Bearer <token>
pub async fn me(AuthUser(user): AuthUser) -> Json<ApiResponse<UserData>> {
    Json(ApiResponse::data(UserData { user: user.into() }))
}

/// PUT /auth/profile
/// Headers: Authorization: Bearer <token>
/// Body: { "name"?: "...", "email"?: "..." }
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserData>>, ApiError> {
    let user = services::auth::update_profile(&state, user.id, payload)?;

    Ok(Json(ApiResponse::with_message(
        "Profile updated successfully",
        UserData { user },
    )))
}
