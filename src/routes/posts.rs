use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    dto::{AddCommentRequest, CreatePostRequest, PaginatedPosts, PaginationParams, UpdatePostRequest},
    errors::ApiError,
    models::Post,
    states::AppState,
};

/// POST /posts/
/// Body: { "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = state.store.create_post(payload.content).inspect_err(|e| {
        error!("Failed to create post: {}", e);
    })?;

    info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts/:post_id
/// Body: { "content": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = state
        .store
        .update_post(post_id, payload.content)
        .inspect_err(|e| {
            error!("Failed to update post {}: {}", post_id, e);
        })?;

    info!("Post updated: {}", post.id);

    Ok(Json(post))
}

/// GET /posts/?page=1&limit=10
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedPosts>, ApiError> {
    if params.page < 1 {
        warn!("Invalid page query parameter");
        return Err(ApiError::ValidationError("Invalid page parameter".into()));
    }
    if params.limit < 1 {
        warn!("Invalid limit query parameter");
        return Err(ApiError::ValidationError("Invalid limit parameter".into()));
    }

    // Snapshot in creation order; pagination happens here, not in the store.
    let posts = state.store.list_posts();

    let total = posts.len();
    // Page and limit come straight off the query string; saturate instead
    // of overflowing on absurd values.
    let start = (params.page - 1).saturating_mul(params.limit);
    let end = start.saturating_add(params.limit).min(total);

    // Pages past the end are an empty list, not an error.
    let page_posts = if start < total {
        posts[start..end].to_vec()
    } else {
        vec![]
    };

    Ok(Json(PaginatedPosts {
        posts: page_posts,
        page: params.page,
        limit: params.limit,
        total,
    }))
}

/// GET /posts/:post_id
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.get_post(post_id)?;

    Ok(Json(post))
}

/// POST /posts/:post_id/like
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.like_post(post_id).inspect_err(|e| {
        error!("Failed to like post {}: {}", post_id, e);
    })?;

    info!("Like added to post {}", post.id);

    Ok(Json(post))
}

/// POST /posts/:post_id/comments
/// Body: { "text": "..." }
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = state
        .store
        .add_comment(post_id, payload.text)
        .inspect_err(|e| {
            error!("Failed to add comment to post {}: {}", post_id, e);
        })?;

    info!("Comment added to post {}", post.id);

    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::routes::post_routes;
    use crate::states::AppState;

    fn app() -> Router {
        Router::new()
            .nest("/posts", post_routes())
            .with_state(AppState::new())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_like_and_comment_flow() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts", r#"{"content":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let post = json_body(response).await;
        assert_eq!(post["id"], 1);
        assert_eq!(post["content"], "hello");
        assert_eq!(post["likes"], 0);
        assert_eq!(post["comments"], serde_json::json!([]));

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts/1/like", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["likes"], 1);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts/1/comments", r#"{"text":"nice"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let post = json_body(response).await;
        assert_eq!(post["comments"][0]["id"], 1);
        assert_eq!(post["comments"][0]["text"], "nice");

        let response = app.oneshot(get_request("/posts/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let post = json_body(response).await;
        assert_eq!(post["likes"], 1);
        assert_eq!(post["comments"][0]["text"], "nice");
    }

    #[tokio::test]
    async fn validation_maps_to_400_and_missing_posts_to_404() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts", r#"{"content":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Well-formed JSON missing the required field is still a bad request.
        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/posts/1", r#"{"wrong":"field"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/posts/99", r#"{"content":"edited"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts/99/like", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // A non-numeric ID never reaches the store.
        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts/abc/like", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get_request("/posts/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_posts_paginates_over_creation_order() {
        let app = app();

        for i in 1..=25 {
            let body = format!(r#"{{"content":"post {i}"}}"#);
            let response = app
                .clone()
                .oneshot(json_request("POST", "/posts", &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(get_request("/posts?page=3&limit=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = json_body(response).await;
        assert_eq!(page["total"], 25);
        assert_eq!(page["posts"].as_array().unwrap().len(), 5);
        assert_eq!(page["posts"][0]["id"], 21);
        assert_eq!(page["posts"][4]["id"], 25);

        // Past the last page: empty result, still 200.
        let response = app
            .clone()
            .oneshot(get_request("/posts?page=100&limit=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = json_body(response).await;
        assert_eq!(page["posts"], serde_json::json!([]));
        assert_eq!(page["total"], 25);

        // Defaults: page=1, limit=10.
        let response = app.clone().oneshot(get_request("/posts")).await.unwrap();
        let page = json_body(response).await;
        assert_eq!(page["page"], 1);
        assert_eq!(page["limit"], 10);
        assert_eq!(page["posts"].as_array().unwrap().len(), 10);

        let response = app
            .oneshot(get_request("/posts?page=0&limit=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_posts_survives_huge_page_numbers() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/posts", r#"{"content":"only one"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // page * limit would overflow usize; must still be an empty 200.
        let uri = format!("/posts?page={}&limit=10", usize::MAX);
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = json_body(response).await;
        assert_eq!(page["posts"], serde_json::json!([]));
        assert_eq!(page["total"], 1);

        let uri = format!("/posts?page=2&limit={}", usize::MAX);
        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = json_body(response).await;
        assert_eq!(page["posts"], serde_json::json!([]));
    }
}
