use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Comment;

/// A social-media post: some text, a like counter and its comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub content: String,
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
