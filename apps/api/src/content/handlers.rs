//! Axum route handlers for the content API.
//!
//! The same handlers serve the unified `/api/content/*` routes (platform from
//! the body) and the platform-scoped routes, which attach a `PlatformPreset`
//! extension.

use axum::{extract::State, Extension, Json};

use crate::content::extract::ValidatedJson;
use crate::content::models::{
    CaptionRequest, CaptionResponse, ContentIdeasRequest, ContentIdeasResponse, ContentKind,
    HashtagRequest, HashtagResponse, Platform, PlatformPreset, VideoDescriptionRequest,
    VideoDescriptionResponse, VideoTagsRequest, VideoTagsResponse, VideoTitleRequest,
    VideoTitleResponse,
};
use crate::errors::AppError;
use crate::state::AppState;

fn resolve_platform(
    preset: Option<Extension<PlatformPreset>>,
    body: Option<&str>,
) -> Result<Platform, AppError> {
    let preset = preset.map(|Extension(PlatformPreset(platform))| platform);
    Platform::resolve(preset.as_ref(), body)
}

/// POST /api/content/caption
pub async fn handle_caption(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<CaptionRequest>,
) -> Result<Json<CaptionResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let caption = state
        .generator
        .caption(platform.as_str(), &request.topic, request.tone, request.length)
        .await
        .map_err(AppError::generation(ContentKind::Caption))?;

    Ok(Json(CaptionResponse { caption, platform }))
}

/// POST /api/content/hashtags
pub async fn handle_hashtags(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<HashtagRequest>,
) -> Result<Json<HashtagResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let hashtags = state
        .generator
        .hashtags(platform.as_str(), &request.topic, request.count)
        .await
        .map_err(AppError::generation(ContentKind::Hashtags))?;

    Ok(Json(HashtagResponse {
        count: hashtags.len(),
        hashtags,
        platform,
    }))
}

/// POST /api/content/content-ideas
pub async fn handle_content_ideas(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<ContentIdeasRequest>,
) -> Result<Json<ContentIdeasResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let ideas = state
        .generator
        .content_ideas(platform.as_str(), &request.niche, request.count)
        .await
        .map_err(AppError::generation(ContentKind::ContentIdeas))?;

    Ok(Json(ContentIdeasResponse {
        count: ideas.len(),
        ideas,
        platform,
    }))
}

/// POST /api/content/video/title
pub async fn handle_video_title(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<VideoTitleRequest>,
) -> Result<Json<VideoTitleResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let title = state
        .generator
        .video_title(platform.as_str(), &request.topic, &request.style)
        .await
        .map_err(AppError::generation(ContentKind::VideoTitle))?;

    Ok(Json(VideoTitleResponse { title, platform }))
}

/// POST /api/content/video/description
pub async fn handle_video_description(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<VideoDescriptionRequest>,
) -> Result<Json<VideoDescriptionResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let description = state
        .generator
        .video_description(platform.as_str(), &request.topic, request.length)
        .await
        .map_err(AppError::generation(ContentKind::VideoDescription))?;

    Ok(Json(VideoDescriptionResponse {
        description,
        platform,
    }))
}

/// POST /api/content/video/tags
pub async fn handle_video_tags(
    State(state): State<AppState>,
    preset: Option<Extension<PlatformPreset>>,
    ValidatedJson(request): ValidatedJson<VideoTagsRequest>,
) -> Result<Json<VideoTagsResponse>, AppError> {
    let platform = resolve_platform(preset, request.platform.as_deref())?;

    let tags = state
        .generator
        .video_tags(platform.as_str(), &request.topic, request.count)
        .await
        .map_err(AppError::generation(ContentKind::VideoTags))?;

    Ok(Json(VideoTagsResponse {
        count: tags.len(),
        tags,
        platform,
    }))
}
