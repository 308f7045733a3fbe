use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::auth::{AuthUser, OptionalUser};
use crate::dto::{
    ApiResponse, CreatePostRequest, PostData, PostListData, PostQuery, UpdatePostRequest,
};
use crate::errors::ApiError;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::services;
use crate::state::AppState;

/// GET /posts?page=1&limit=10&search=...
/// Auth optional; a valid token marks the caller's own posts.
pub async fn list_posts(
    State(state): State<AppState>,
    OptionalUser(viewer): OptionalUser,
    ApiQuery(params): ApiQuery<PostQuery>,
) -> Result<Json<ApiResponse<PostListData>>, ApiError> {
    let data = services::posts::list_posts(&state, &params, viewer.map(|user| user.id))?;

    Ok(Json(ApiResponse::data(data)))
}

/// GET /posts/{id}
/// Auth optional; sets the isAuthor flag for the caller.
pub async fn get_post(
    State(state): State<AppState>,
    OptionalUser(viewer): OptionalUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<PostData>>, ApiError> {
    let post = services::posts::get_post(&state, id, viewer.map(|user| user.id))?;

    Ok(Json(ApiResponse::data(PostData { post })))
}

/// GET /posts/user/me?page=1&limit=10
/// Headers: Authorization: Bearer <token>
pub async fn my_posts(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiQuery(params): ApiQuery<PostQuery>,
) -> Result<Json<ApiResponse<PostListData>>, ApiError> {
    let data = services::posts::list_my_posts(&state, &user, &params)?;

    Ok(Json(ApiResponse::data(data)))
}

/// POST /posts
/// Headers: Authorization: Bearer <token>
/// Body: { "title": "...", "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostData>>), ApiError> {
    let post = services::posts::create_post(&state, &user, payload)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Post created successfully",
            PostData { post },
        )),
    ))
}

/// PUT /posts/{id}
/// Headers: Authorization: Bearer <token>; owner only.
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostData>>, ApiError> {
    let post = services::posts::update_post(&state, &user, id, payload)?;

    Ok(Json(ApiResponse::with_message(
        "Post updated successfully",
        PostData { post },
    )))
}

/// DELETE /posts/{id}
/// Headers: Authorization: Bearer <token>; owner only.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    services::posts::delete_post(&state, &user, id)?;

    Ok(Json(ApiResponse::message("Post deleted successfully")))
}
