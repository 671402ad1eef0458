mod comment;
mod post;

pub use comment::Comment;
pub use post::Post;
