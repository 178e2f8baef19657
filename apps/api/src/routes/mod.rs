pub mod health;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::content::handlers;
use crate::content::models::PlatformPreset;
use crate::state::AppState;

/// Every content kind, platform taken from the request body.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/caption", post(handlers::handle_caption))
        .route("/hashtags", post(handlers::handle_hashtags))
        .route("/content-ideas", post(handlers::handle_content_ideas))
        .route("/video/title", post(handlers::handle_video_title))
        .route("/video/description", post(handlers::handle_video_description))
        .route("/video/tags", post(handlers::handle_video_tags))
}

/// Caption-first platforms (Instagram, TikTok).
fn social_routes(platform: &'static str) -> Router<AppState> {
    Router::new()
        .route("/caption", post(handlers::handle_caption))
        .route("/hashtags", post(handlers::handle_hashtags))
        .route("/content-ideas", post(handlers::handle_content_ideas))
        .layer(Extension(PlatformPreset::new(platform)))
}

/// Video-first platforms (YouTube).
fn video_routes(platform: &'static str) -> Router<AppState> {
    Router::new()
        .route("/title", post(handlers::handle_video_title))
        .route("/description", post(handlers::handle_video_description))
        .route("/tags", post(handlers::handle_video_tags))
        .route("/content-ideas", post(handlers::handle_content_ideas))
        .layer(Extension(PlatformPreset::new(platform)))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/health/upstream", get(health::upstream_health_handler))
        .nest("/api/content", content_routes())
        .nest("/api/instagram", social_routes("instagram"))
        .nest("/api/tiktok", social_routes("tiktok"))
        .nest("/api/youtube", video_routes("youtube"))
        .with_state(state)
}
