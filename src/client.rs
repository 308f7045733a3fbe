//! Client-side mirrors of server state.
//!
//! A presentation layer embedding this crate keeps two independent
//! containers in sync with the API: one for the authenticated identity and
//! one for the currently displayed page of posts. Both are plain values
//! with explicit mutation methods; callers own them and pass references
//! around rather than reaching for a global singleton. Each mutation
//! corresponds to a completed server round trip.

use uuid::Uuid;

use crate::dto::{PageMeta, PostView, UserView};

/// Mirror of the authenticated identity and its bearer token.
#[derive(Debug, Default, Clone)]
pub struct AuthSession {
    user: Option<UserView>,
    token: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful register/login response.
    pub fn login(&mut self, user: UserView, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// Apply the user view returned by a profile update; the token stays.
    pub fn profile_updated(&mut self, user: UserView) {
        self.user = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserView> {
        self.user.as_ref()
    }

    /// The `Authorization` header value for the next request, if logged in.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Mirror of the currently displayed page of posts.
#[derive(Debug, Default, Clone)]
pub struct PostFeed {
    posts: Vec<PostView>,
    pagination: Option<PageMeta>,
}

impl PostFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the feed with a freshly fetched page.
    pub fn page_loaded(&mut self, posts: Vec<PostView>, pagination: PageMeta) {
        self.posts = posts;
        self.pagination = Some(pagination);
    }

    /// A post the user just created shows up at the top of the feed.
    pub fn post_created(&mut self, post: PostView) {
        self.posts.insert(0, post);
    }

    pub fn post_updated(&mut self, updated: PostView) {
        if let Some(slot) = self.posts.iter_mut().find(|post| post.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn post_removed(&mut self, id: Uuid) {
        self.posts.retain(|post| post.id != id);
    }

    pub fn clear(&mut self) {
        self.posts.clear();
        self.pagination = None;
    }

    pub fn posts(&self) -> &[PostView] {
        &self.posts
    }

    pub fn pagination(&self) -> Option<&PageMeta> {
        self.pagination.as_ref()
    }
}
