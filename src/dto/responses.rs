use serde::Serialize;

use crate::models::Post;

/// One page of the post listing.
#[derive(Debug, Serialize)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}
