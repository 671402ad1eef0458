mod requests;
mod responses;

pub use requests::{AddCommentRequest, CreatePostRequest, PaginationParams, UpdatePostRequest};
pub use responses::PaginatedPosts;
