use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::Post;

/// Retrieval predicate: free-text search over title+content and/or an
/// author restriction. The same predicate drives both the page contents
/// and the total count.
#[derive(Debug, Default, Clone)]
pub struct PostFilter {
    pub search: Option<String>,
    pub author_id: Option<Uuid>,
}

impl PostFilter {
    fn matches(&self, post: &Post) -> bool {
        if let Some(author_id) = self.author_id {
            if post.author_id != author_id {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// One page of posts plus the figures needed for pagination metadata.
#[derive(Debug)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

#[derive(Clone)]
pub struct PostStore {
    posts: Arc<DashMap<Uuid, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(DashMap::new()),
        }
    }

    pub fn create(&self, author_id: Uuid, title: &str, content: &str) -> Post {
        let post = Post::new(author_id, title.trim().to_string(), content.trim().to_string());
        self.posts.insert(post.id, post.clone());
        post
    }

    pub fn get(&self, id: Uuid) -> Result<Post, ApiError> {
        self.posts
            .get(&id)
            .map(|post| post.clone())
            .ok_or(ApiError::NotFound)
    }

    /// Apply partial edits. Any accepted edit bumps `updated_at`; an
    /// update carrying no fields leaves the post untouched.
    pub fn update(
        &self,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post, ApiError> {
        let mut post = self.posts.get_mut(&id).ok_or(ApiError::NotFound)?;

        let mut changed = false;
        if let Some(title) = title {
            post.title = title.trim().to_string();
            changed = true;
        }
        if let Some(content) = content {
            post.content = content.trim().to_string();
            changed = true;
        }
        if changed {
            post.updated_at = Utc::now();
        }

        Ok(post.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.posts.remove(&id).map(|_| ()).ok_or(ApiError::NotFound)
    }

    /// Newest-first page of posts matching `filter`. Out-of-range pages
    /// yield an empty set, never an error.
    pub fn list(&self, filter: &PostFilter, page: usize, limit: usize) -> PostPage {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let mut matching: Vec<Post> = self
            .posts
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|post| filter.matches(post))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let start = (page - 1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(total);

        let posts = if start < total {
            matching[start..end].to_vec()
        } else {
            Vec::new()
        };

        PostPage {
            posts,
            page,
            limit,
            total,
        }
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> (PostStore, Uuid) {
        let store = PostStore::new();
        let author = Uuid::new_v4();
        for n in 0..count {
            store.create(author, &format!("Post {n}"), &format!("Content {n}"));
        }
        (store, author)
    }

    #[test]
    fn pagination_splits_fifteen_posts_into_ten_and_five() {
        let (store, _) = seeded(15);

        let first = store.list(&PostFilter::default(), 1, 10);
        assert_eq!(first.posts.len(), 10);
        assert_eq!(first.total, 15);

        let second = store.list(&PostFilter::default(), 2, 10);
        assert_eq!(second.posts.len(), 5);
        assert_eq!(second.total, 15);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let (store, _) = seeded(3);

        let page = store.list(&PostFilter::default(), 99, 10);
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn listing_is_newest_first() {
        let store = PostStore::new();
        let author = Uuid::new_v4();
        store.create(author, "older", "first");
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.create(author, "newer", "second");

        let page = store.list(&PostFilter::default(), 1, 10);
        assert_eq!(page.posts[0].title, "newer");
        assert_eq!(page.posts[1].title, "older");
    }

    #[test]
    fn search_covers_title_and_content_case_insensitively() {
        let store = PostStore::new();
        let author = Uuid::new_v4();
        store.create(author, "Rust ownership", "memory safety");
        store.create(author, "Gardening", "growing RUST-colored roses");
        store.create(author, "Cooking", "pasta");

        let filter = PostFilter {
            search: Some("rust".into()),
            ..Default::default()
        };
        let page = store.list(&filter, 1, 10);
        assert_eq!(page.posts.len(), 2);
        // Count and page use the same predicate.
        assert_eq!(page.total, 2);
    }

    #[test]
    fn author_filter_limits_to_one_user() {
        let store = PostStore::new();
        let ada = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.create(ada, "by ada", "x");
        store.create(bob, "by bob", "y");

        let filter = PostFilter {
            author_id: Some(ada),
            ..Default::default()
        };
        let page = store.list(&filter, 1, 10);
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].author_id, ada);
    }

    #[test]
    fn update_bumps_updated_at_only() {
        let store = PostStore::new();
        let post = store.create(Uuid::new_v4(), "T", "C");
        assert_eq!(post.created_at, post.updated_at);

        std::thread::sleep(std::time::Duration::from_millis(2));
        let updated = store.update(post.id, None, Some("C2")).unwrap();
        assert_eq!(updated.title, "T");
        assert_eq!(updated.content, "C2");
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at > updated.created_at);
    }

    #[test]
    fn empty_update_leaves_updated_at_alone() {
        let store = PostStore::new();
        let post = store.create(Uuid::new_v4(), "T", "C");

        std::thread::sleep(std::time::Duration::from_millis(2));
        let same = store.update(post.id, None, None).unwrap();
        assert_eq!(same.updated_at, post.updated_at);
        assert_eq!(same.title, "T");
        assert_eq!(same.content, "C");
    }

    #[test]
    fn delete_is_not_idempotent() {
        let store = PostStore::new();
        let post = store.create(Uuid::new_v4(), "T", "C");

        store.delete(post.id).unwrap();
        assert!(matches!(store.delete(post.id), Err(ApiError::NotFound)));
        assert!(matches!(store.get(post.id), Err(ApiError::NotFound)));
    }
}
