use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 250, message = "Content should be within 1-250 characters"))]
    pub content: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 250, message = "Content should be within 1-250 characters"))]
    pub content: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 150, message = "Text should be within 1-150 characters"))]
    pub text: String,
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}
fn default_limit() -> usize {
    10
}
