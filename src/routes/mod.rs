mod health;
mod posts;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::states::AppState;

pub use health::health_check;
use posts::{add_comment, create_post, get_post, like_post, list_posts, update_post};

/// Routes under `/posts`.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_post).get(list_posts))
        .route("/{post_id}", put(update_post).get(get_post))
        .route("/{post_id}/like", post(like_post))
        .route("/{post_id}/comments", post(add_comment))
}
