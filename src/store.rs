use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::models::{Comment, Post};

pub const MAX_CONTENT_LEN: usize = 250;
pub const MAX_COMMENT_LEN: usize = 150;

/// Errors a store operation can surface to its caller. Both are ordinary,
/// recoverable conditions; the transport layer decides how to render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(String),
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "{msg}"),
            StoreError::NotFound => write!(f, "post not found"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Default)]
struct StoreInner {
    posts: Vec<Post>,
    next_id: u64,
}

/// In-memory repository of all posts. A single mutex serializes every read
/// and write, so callers always observe fully-consistent snapshots and no
/// partial mutation is ever visible. All operations return owned copies,
/// never references into the collection.
pub struct PostStore {
    inner: Mutex<StoreInner>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A panic while holding the lock can only happen between complete
        // mutations, so the data is still consistent and safe to reuse.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Creates a new post with the given content.
    ///
    /// Validation runs before the lock is taken: a rejected create never
    /// consumes a post ID.
    pub fn create_post(&self, content: String) -> Result<Post, StoreError> {
        validate_content(&content)?;

        let mut inner = self.lock();
        let now = Utc::now();
        let post = Post {
            id: inner.next_id,
            content,
            likes: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.posts.push(post.clone());

        Ok(post)
    }

    /// Replaces the content of an existing post and refreshes `updated_at`.
    /// Likes and comments are untouched.
    ///
    /// Content is validated before the lookup, so invalid content on a
    /// nonexistent ID reports the validation error, not `NotFound`.
    pub fn update_post(&self, id: u64, new_content: String) -> Result<Post, StoreError> {
        validate_content(&new_content)?;

        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::NotFound)?;
        post.content = new_content;
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    /// Increments the like counter of a post by one. There is no upper bound.
    pub fn like_post(&self, id: u64) -> Result<Post, StoreError> {
        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(StoreError::NotFound)?;
        post.likes += 1;

        Ok(post.clone())
    }

    /// Fetches the current state of a single post, comments included.
    pub fn get_post(&self, id: u64) -> Result<Post, StoreError> {
        let inner = self.lock();
        inner
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Appends a comment to a post and returns the updated post.
    ///
    /// The comment ID is the post's current comment count plus one: a
    /// per-post sequence, not a global one. Text validation runs before the
    /// post lookup, same ordering as `update_post`.
    pub fn add_comment(&self, post_id: u64, text: String) -> Result<Post, StoreError> {
        validate_comment(&text)?;

        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(StoreError::NotFound)?;
        let comment = Comment {
            id: post.comments.len() as u64 + 1,
            text,
            created_at: Utc::now(),
        };
        post.comments.push(comment);

        Ok(post.clone())
    }

    /// Returns a snapshot of every post, in creation order. Pagination is
    /// the caller's concern.
    pub fn list_posts(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_content(content: &str) -> Result<(), StoreError> {
    if content.trim().is_empty() {
        return Err(StoreError::Validation(
            "post content cannot be empty".into(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(StoreError::Validation(format!(
            "post content exceeds maximum length of {MAX_CONTENT_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_comment(text: &str) -> Result<(), StoreError> {
    if text.trim().is_empty() {
        return Err(StoreError::Validation("comment cannot be empty".into()));
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(StoreError::Validation(format!(
            "comment exceeds maximum length of {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(())
}
