mod dto;
mod errors;
mod models;
mod routes;
mod states;
mod store;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::states::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // Create application state
    let state = AppState::new();

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .route("/health", get(routes::health_check))
        .nest("/posts", routes::post_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                   - Health check");
    info!("  POST   /posts/                   - Create post");
    info!("  GET    /posts/                   - List posts (paginated)");
    info!("  GET    /posts/:postID            - Get specific post");
    info!("  PUT    /posts/:postID            - Update post content");
    info!("  POST   /posts/:postID/like       - Like a post");
    info!("  POST   /posts/:postID/comments   - Comment on a post");

    axum::serve(listener, app).await.unwrap();
}
