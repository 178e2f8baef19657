//! Prompt Builder: one pure function per content kind.
//!
//! Each template embeds its own formatting rules (one item per line, length
//! limits) because the normalizer parses the reply line by line.

use crate::content::models::{Length, Tone};

const FALLBACK_PLATFORM_LABEL: &str = "the target platform";

/// Replace: {platform}, {topic}, {tone}, {length}
const CAPTION_TEMPLATE: &str = "Generate an engaging caption for {platform} about: {topic}

Requirements:
- Platform-specific nuances for {platform}
- Tone: {tone}
- Length: {length} (short: 1-2 sentences, medium: 3-5 sentences, long: 6-10 sentences)
- Use formatting, emojis, or mentions that fit {platform}
- Add a call-to-action that suits {platform} culture

Respond with the caption only.";

/// Replace: {platform}, {topic}, {count}
const HASHTAGS_TEMPLATE: &str = "Generate {count} relevant hashtags for {platform} about: {topic}

Requirements:
- Include a mix of broad and niche tags suitable for {platform}
- Reflect current trends and community language
- Format: one hashtag per line (include # if the platform uses it)

Respond with hashtags only.";

/// Replace: {platform}, {niche}, {count}
const CONTENT_IDEAS_TEMPLATE: &str = "Generate {count} creative content ideas for {platform} in the niche: {niche}

Requirements:
- Mix of popular and emerging content formats for {platform}
- Provide a short description for each idea
- Highlight hooks, calls-to-action, or storytelling angles that resonate on {platform}
- Format: one idea per line

Format:
[Format] - [Idea Title]: [Brief Description]";

/// Replace: {platform}, {topic}, {style}
const VIDEO_TITLE_TEMPLATE: &str = "Generate a compelling {platform} video title about: {topic}

Requirements:
- Style: {style} (clickable, informative, educational, entertaining, inspirational, etc.)
- Optimize for search and click-through on {platform}
- Keep under 70 characters when possible
- Avoid clickbait wording

Respond with the title only.";

/// Replace: {platform}, {topic}, {length}
const VIDEO_DESCRIPTION_TEMPLATE: &str = "Write a {length} {platform} video description about: {topic}

Requirements:
- Include a strong hook in the first sentence
- Add relevant keywords and optional timestamps
- Close with a call-to-action that fits {platform}
- Keep formatting clean and readable

Respond with the description only.";

/// Replace: {platform}, {topic}, {count}
const VIDEO_TAGS_TEMPLATE: &str = "Generate {count} SEO-friendly tags/keywords for a {platform} video about: {topic}

Requirements:
- Mix of short-tail and long-tail keywords
- Reflect search intent on {platform}
- Format: one tag per line (no # symbol unless common on the platform)

Respond with tags only.";

fn platform_label(platform: &str) -> &str {
    let trimmed = platform.trim();
    if trimmed.is_empty() {
        FALLBACK_PLATFORM_LABEL
    } else {
        trimmed
    }
}

// User text is substituted last so a topic containing "{platform}" stays literal.

pub fn caption_prompt(platform: &str, topic: &str, tone: Tone, length: Length) -> String {
    CAPTION_TEMPLATE
        .replace("{tone}", tone.as_str())
        .replace("{length}", length.as_str())
        .replace("{platform}", platform_label(platform))
        .replace("{topic}", topic.trim())
}

pub fn hashtags_prompt(platform: &str, topic: &str, count: usize) -> String {
    HASHTAGS_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{platform}", platform_label(platform))
        .replace("{topic}", topic.trim())
}

pub fn content_ideas_prompt(platform: &str, niche: &str, count: usize) -> String {
    CONTENT_IDEAS_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{platform}", platform_label(platform))
        .replace("{niche}", niche.trim())
}

pub fn video_title_prompt(platform: &str, topic: &str, style: &str) -> String {
    VIDEO_TITLE_TEMPLATE
        .replace("{platform}", platform_label(platform))
        .replace("{style}", style.trim())
        .replace("{topic}", topic.trim())
}

pub fn video_description_prompt(platform: &str, topic: &str, length: Length) -> String {
    VIDEO_DESCRIPTION_TEMPLATE
        .replace("{length}", length.as_str())
        .replace("{platform}", platform_label(platform))
        .replace("{topic}", topic.trim())
}

pub fn video_tags_prompt(platform: &str, topic: &str, count: usize) -> String {
    VIDEO_TAGS_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{platform}", platform_label(platform))
        .replace("{topic}", topic.trim())
}
