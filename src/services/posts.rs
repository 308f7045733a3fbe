use tracing::info;
use uuid::Uuid;

use crate::dto::{
    AuthorView, CreatePostRequest, PageMeta, PostListData, PostQuery, PostView, UpdatePostRequest,
};
use crate::errors::ApiError;
use crate::models::{Post, User};
use crate::state::AppState;
use crate::store::PostFilter;

/// Ownership gate: load the post once, then require the caller to be its
/// author. The loaded post is returned so callers never look it up twice.
pub fn authorize_owner(state: &AppState, post_id: Uuid, user_id: Uuid) -> Result<Post, ApiError> {
    let post = state.posts.get(post_id)?;
    if !post.is_author(user_id) {
        return Err(ApiError::Forbidden);
    }
    Ok(post)
}

pub fn list_posts(
    state: &AppState,
    query: &PostQuery,
    viewer: Option<Uuid>,
) -> Result<PostListData, ApiError> {
    let filter = PostFilter {
        search: query.search.clone(),
        author_id: None,
    };
    page_of(state, &filter, query, viewer)
}

/// The caller's own posts; every entry carries `isAuthor: true`.
pub fn list_my_posts(
    state: &AppState,
    author: &User,
    query: &PostQuery,
) -> Result<PostListData, ApiError> {
    let filter = PostFilter {
        search: None,
        author_id: Some(author.id),
    };
    page_of(state, &filter, query, Some(author.id))
}

pub fn get_post(state: &AppState, id: Uuid, viewer: Option<Uuid>) -> Result<PostView, ApiError> {
    let post = state.posts.get(id)?;
    view(state, post, viewer)
}

pub fn create_post(
    state: &AppState,
    author: &User,
    payload: CreatePostRequest,
) -> Result<PostView, ApiError> {
    let post = state.posts.create(author.id, &payload.title, &payload.content);

    info!("Post created: {} by user {}", post.id, author.id);

    view(state, post, Some(author.id))
}

pub fn update_post(
    state: &AppState,
    author: &User,
    id: Uuid,
    payload: UpdatePostRequest,
) -> Result<PostView, ApiError> {
    authorize_owner(state, id, author.id)?;

    let post = state
        .posts
        .update(id, payload.title.as_deref(), payload.content.as_deref())?;

    info!("Post updated: {} by user {}", id, author.id);

    view(state, post, Some(author.id))
}

pub fn delete_post(state: &AppState, author: &User, id: Uuid) -> Result<(), ApiError> {
    authorize_owner(state, id, author.id)?;
    state.posts.delete(id)?;

    info!("Post deleted: {} by user {}", id, author.id);

    Ok(())
}

fn page_of(
    state: &AppState,
    filter: &PostFilter,
    query: &PostQuery,
    viewer: Option<Uuid>,
) -> Result<PostListData, ApiError> {
    let page = state.posts.list(filter, query.page, query.limit);
    let pagination = PageMeta::new(page.page, page.limit, page.total);

    let posts = page
        .posts
        .into_iter()
        .map(|post| view(state, post, viewer))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostListData { posts, pagination })
}

/// Join the author identity onto a post and annotate whether the viewer
/// wrote it. Users are never deleted, so a dangling author reference means
/// the stores are out of sync.
fn view(state: &AppState, post: Post, viewer: Option<Uuid>) -> Result<PostView, ApiError> {
    let author = state.users.find_by_id(post.author_id).ok_or_else(|| {
        ApiError::Internal(format!("Author {} missing for post {}", post.author_id, post.id))
    })?;

    let is_author = viewer.is_some_and(|viewer| post.is_author(viewer));

    Ok(PostView {
        id: post.id,
        title: post.title,
        content: post.content,
        author: AuthorView {
            id: author.id,
            name: author.name,
            email: author.email,
        },
        created_at: post.created_at,
        updated_at: post.updated_at,
        is_author,
    })
}
