//! Request and response bodies for the content API, plus the small value types
//! they are built from.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppError;

const MAX_PLATFORM_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Value types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Energetic,
    Friendly,
    Humorous,
    Inspirational,
    Educational,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Energetic => "energetic",
            Tone::Friendly => "friendly",
            Tone::Humorous => "humorous",
            Tone::Inspirational => "inspirational",
            Tone::Educational => "educational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length bucket for captions and descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a request asks the model to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Caption,
    Hashtags,
    ContentIdeas,
    VideoTitle,
    VideoDescription,
    VideoTags,
}

impl ContentKind {
    /// Human label used in error envelopes: "Failed to generate {label}".
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Caption => "caption",
            ContentKind::Hashtags => "hashtags",
            ContentKind::ContentIdeas => "content ideas",
            ContentKind::VideoTitle => "video title",
            ContentKind::VideoDescription => "video description",
            ContentKind::VideoTags => "video tags",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text platform name, sanitized.
///
/// Any platform is accepted. Sanitizing trims, drops control characters and
/// collapses inner whitespace; an empty result is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let cleaned = raw
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if cleaned.is_empty() {
            return Err(AppError::Validation("platform is required".to_string()));
        }
        if cleaned.chars().count() > MAX_PLATFORM_CHARS {
            return Err(AppError::Validation(format!(
                "platform must be at most {MAX_PLATFORM_CHARS} characters"
            )));
        }
        Ok(Platform(cleaned))
    }

    /// A route preset wins over whatever the body carries.
    pub fn resolve(preset: Option<&Platform>, body: Option<&str>) -> Result<Self, AppError> {
        match (preset, body) {
            (Some(preset), _) => Ok(preset.clone()),
            (None, Some(raw)) => Platform::parse(raw),
            (None, None) => Err(AppError::Validation("platform is required".to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Platform fixed by a route prefix such as `/api/instagram`.
#[derive(Debug, Clone)]
pub struct PlatformPreset(pub Platform);

impl PlatformPreset {
    pub fn new(name: &'static str) -> Self {
        PlatformPreset(Platform(name.to_string()))
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn default_hashtag_count() -> usize {
    10
}

fn default_idea_count() -> usize {
    5
}

fn default_tag_count() -> usize {
    15
}

fn default_style() -> String {
    "clickable".to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CaptionRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HashtagRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub topic: String,
    #[validate(range(min = 5, max = 30, message = "must be between 5 and 30"))]
    #[serde(default = "default_hashtag_count")]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContentIdeasRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub niche: String,
    #[validate(range(min = 3, max = 10, message = "must be between 3 and 10"))]
    #[serde(default = "default_idea_count")]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoTitleRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub topic: String,
    /// clickable, informative, educational, entertaining, ...
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom(function = "not_blank")
    )]
    #[serde(default = "default_style")]
    pub style: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoDescriptionRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub topic: String,
    #[serde(default)]
    pub length: Length,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoTagsRequest {
    pub platform: Option<String>,
    #[validate(
        length(min = 1, max = 500, message = "must be between 1 and 500 characters"),
        custom(function = "not_blank")
    )]
    pub topic: String,
    #[validate(range(min = 5, max = 30, message = "must be between 5 and 30"))]
    #[serde(default = "default_tag_count")]
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
    pub platform: Platform,
}

/// `count` is the number of hashtags actually returned, never the requested count.
#[derive(Debug, Serialize)]
pub struct HashtagResponse {
    pub hashtags: Vec<String>,
    pub count: usize,
    pub platform: Platform,
}

#[derive(Debug, Serialize)]
pub struct ContentIdeasResponse {
    pub ideas: Vec<String>,
    pub count: usize,
    pub platform: Platform,
}

#[derive(Debug, Serialize)]
pub struct VideoTitleResponse {
    pub title: String,
    pub platform: Platform,
}

#[derive(Debug, Serialize)]
pub struct VideoDescriptionResponse {
    pub description: String,
    pub platform: Platform,
}

#[derive(Debug, Serialize)]
pub struct VideoTagsResponse {
    pub tags: Vec<String>,
    pub count: usize,
    pub platform: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caption_request_defaults() {
        let req: CaptionRequest =
            serde_json::from_value(json!({ "topic": "morning coffee" })).unwrap();
        assert_eq!(req.tone, Tone::Casual);
        assert_eq!(req.length, Length::Medium);
        assert!(req.platform.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_tone_fails_deserialization() {
        let result: Result<CaptionRequest, _> =
            serde_json::from_value(json!({ "topic": "x", "tone": "sarcastic" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_topic_fails_validation() {
        let req: CaptionRequest = serde_json::from_value(json!({ "topic": "   " })).unwrap();
        assert!(req.validate().is_err());

        let req: CaptionRequest = serde_json::from_value(json!({ "topic": "" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_hashtag_count_range() {
        let ok: HashtagRequest =
            serde_json::from_value(json!({ "topic": "fitness", "count": 30 })).unwrap();
        assert!(ok.validate().is_ok());

        let too_few: HashtagRequest =
            serde_json::from_value(json!({ "topic": "fitness", "count": 4 })).unwrap();
        assert!(too_few.validate().is_err());

        let too_many: HashtagRequest =
            serde_json::from_value(json!({ "topic": "fitness", "count": 31 })).unwrap();
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_count_defaults_per_kind() {
        let hashtags: HashtagRequest = serde_json::from_value(json!({ "topic": "a" })).unwrap();
        let ideas: ContentIdeasRequest = serde_json::from_value(json!({ "niche": "a" })).unwrap();
        let tags: VideoTagsRequest = serde_json::from_value(json!({ "topic": "a" })).unwrap();
        assert_eq!(hashtags.count, 10);
        assert_eq!(ideas.count, 5);
        assert_eq!(tags.count, 15);
    }

    #[test]
    fn test_idea_count_range() {
        let too_many: ContentIdeasRequest =
            serde_json::from_value(json!({ "niche": "sustainable living", "count": 11 })).unwrap();
        assert!(too_many.validate().is_err());

        let too_few: ContentIdeasRequest =
            serde_json::from_value(json!({ "niche": "sustainable living", "count": 2 })).unwrap();
        assert!(too_few.validate().is_err());
    }

    #[test]
    fn test_negative_count_fails_deserialization() {
        let result: Result<VideoTagsRequest, _> =
            serde_json::from_value(json!({ "topic": "cooking", "count": -1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_video_title_style_default_and_limit() {
        let req: VideoTitleRequest =
            serde_json::from_value(json!({ "topic": "how to start a podcast" })).unwrap();
        assert_eq!(req.style, "clickable");

        let long_style = "x".repeat(51);
        let req: VideoTitleRequest =
            serde_json::from_value(json!({ "topic": "podcast", "style": long_style })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_platform_length_is_checked_after_sanitizing() {
        let req: CaptionRequest = serde_json::from_value(json!({
            "topic": "coffee",
            "platform": format!("Linked{}In", " ".repeat(60))
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        let platform = Platform::parse(req.platform.as_deref().unwrap()).unwrap();
        assert_eq!(platform.as_str(), "Linked In");

        assert!(Platform::parse(&"p".repeat(51)).is_err());
        assert!(Platform::parse(&"p".repeat(50)).is_ok());
    }

    #[test]
    fn test_validation_messages_do_not_echo_input() {
        let req: HashtagRequest =
            serde_json::from_value(json!({ "topic": "fitness", "count": 31 })).unwrap();
        let detail = AppError::from(req.validate().unwrap_err()).to_string();
        assert!(detail.contains("count: must be between 5 and 30"));
        assert!(!detail.contains("Number("));
    }

    #[test]
    fn test_platform_parse_sanitizes() {
        let platform = Platform::parse("  Linked\tIn \n ").unwrap();
        assert_eq!(platform.as_str(), "Linked In");

        let platform = Platform::parse("instagram").unwrap();
        assert_eq!(platform.as_str(), "instagram");
    }

    #[test]
    fn test_platform_parse_rejects_blank() {
        assert!(Platform::parse("   ").is_err());
        assert!(Platform::parse("\u{0007}\n").is_err());
    }

    #[test]
    fn test_platform_resolve_prefers_preset() {
        let preset = PlatformPreset::new("tiktok");
        let platform = Platform::resolve(Some(&preset.0), Some("youtube")).unwrap();
        assert_eq!(platform.as_str(), "tiktok");
    }

    #[test]
    fn test_platform_resolve_requires_some_source() {
        assert!(Platform::resolve(None, None).is_err());
        assert_eq!(
            Platform::resolve(None, Some("Pinterest")).unwrap().as_str(),
            "Pinterest"
        );
    }

    #[test]
    fn test_platform_serializes_as_plain_string() {
        let response = CaptionResponse {
            caption: "hi".to_string(),
            platform: Platform::parse("instagram").unwrap(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "caption": "hi", "platform": "instagram" }));
    }

    #[test]
    fn test_content_kind_labels() {
        assert_eq!(ContentKind::ContentIdeas.to_string(), "content ideas");
        assert_eq!(ContentKind::VideoTags.label(), "video tags");
    }
}
