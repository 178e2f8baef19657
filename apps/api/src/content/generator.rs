//! Content generation: Prompt Builder → completion call → Normalizer, one
//! method per content kind. No per-kind logic beyond marshaling.

use std::sync::Arc;

use tracing::{info, warn};

use crate::content::models::{ContentKind, Length, Tone};
use crate::content::normalize::{normalize_hashtags, normalize_ideas, normalize_tags};
use crate::content::prompts;
use crate::llm_client::{CompletionClient, CompletionError, CompletionOverrides};

#[derive(Clone)]
pub struct ContentGenerator {
    client: Arc<dyn CompletionClient>,
}

impl ContentGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<dyn CompletionClient> {
        &self.client
    }

    async fn complete(&self, kind: ContentKind, prompt: &str) -> Result<String, CompletionError> {
        info!("Generating {kind}");
        self.client
            .complete(prompt, CompletionOverrides::default())
            .await
    }

    pub async fn caption(
        &self,
        platform: &str,
        topic: &str,
        tone: Tone,
        length: Length,
    ) -> Result<String, CompletionError> {
        let prompt = prompts::caption_prompt(platform, topic, tone, length);
        self.complete(ContentKind::Caption, &prompt).await
    }

    pub async fn hashtags(
        &self,
        platform: &str,
        topic: &str,
        count: usize,
    ) -> Result<Vec<String>, CompletionError> {
        let prompt = prompts::hashtags_prompt(platform, topic, count);
        let text = self.complete(ContentKind::Hashtags, &prompt).await?;
        Ok(warn_if_short(
            ContentKind::Hashtags,
            normalize_hashtags(&text, count),
            count,
        ))
    }

    pub async fn content_ideas(
        &self,
        platform: &str,
        niche: &str,
        count: usize,
    ) -> Result<Vec<String>, CompletionError> {
        let prompt = prompts::content_ideas_prompt(platform, niche, count);
        let text = self.complete(ContentKind::ContentIdeas, &prompt).await?;
        Ok(warn_if_short(
            ContentKind::ContentIdeas,
            normalize_ideas(&text, count),
            count,
        ))
    }

    pub async fn video_title(
        &self,
        platform: &str,
        topic: &str,
        style: &str,
    ) -> Result<String, CompletionError> {
        let prompt = prompts::video_title_prompt(platform, topic, style);
        self.complete(ContentKind::VideoTitle, &prompt).await
    }

    pub async fn video_description(
        &self,
        platform: &str,
        topic: &str,
        length: Length,
    ) -> Result<String, CompletionError> {
        let prompt = prompts::video_description_prompt(platform, topic, length);
        self.complete(ContentKind::VideoDescription, &prompt).await
    }

    pub async fn video_tags(
        &self,
        platform: &str,
        topic: &str,
        count: usize,
    ) -> Result<Vec<String>, CompletionError> {
        let prompt = prompts::video_tags_prompt(platform, topic, count);
        let text = self.complete(ContentKind::VideoTags, &prompt).await?;
        Ok(warn_if_short(
            ContentKind::VideoTags,
            normalize_tags(&text, count),
            count,
        ))
    }
}

fn warn_if_short(kind: ContentKind, items: Vec<String>, requested: usize) -> Vec<String> {
    if items.len() < requested {
        warn!(
            "Model returned {} usable {kind} lines, {requested} requested",
            items.len()
        );
    }
    items
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionClient, CompletionError, CompletionOverrides};

    /// Canned completion client that records every prompt it receives.
    pub struct StubClient {
        reply: Option<String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubClient {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Behaves like a client with no credential configured.
        pub fn unconfigured() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }

        pub fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(
            &self,
            prompt: &str,
            _overrides: CompletionOverrides,
        ) -> Result<String, CompletionError> {
            let reply = self.reply.clone().ok_or(CompletionError::MissingCredential)?;
            self.prompts.lock().unwrap().push(prompt.to_string());
            if reply.trim().is_empty() {
                return Err(CompletionError::EmptyResponse);
            }
            Ok(reply.trim().to_string())
        }

        fn has_credential(&self) -> bool {
            self.reply.is_some()
        }
    }
}
