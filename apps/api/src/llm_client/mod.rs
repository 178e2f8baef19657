/// Completion client: the single point of entry for chat-completion calls.
///
/// Handlers never talk to the provider directly. They receive a
/// `CompletionClient` through `AppState`, which is `OpenAiClient` in production
/// and a stub in tests.
///
/// One request, one response: no streaming, no retries, no client-side timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

use prompts::{SYSTEM_PROMPT, VERIFY_PROMPT};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error(
        "OPENAI_API_KEY is not set. Set it in your .env file or environment variables."
    )]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Empty response from completion service")]
    EmptyResponse,
}

impl CompletionError {
    /// `true` for local misconfiguration, `false` for anything the upstream did.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CompletionError::MissingCredential)
    }
}

/// Sampling parameters sent with every completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParameters {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionParameters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.openai_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Applies per-call overrides. `Some(0.0)` is a real temperature, not "unset".
    pub fn with_overrides(&self, overrides: CompletionOverrides) -> Self {
        Self {
            model: self.model.clone(),
            temperature: overrides.temperature.unwrap_or(self.temperature),
            max_tokens: overrides.max_tokens.unwrap_or(self.max_tokens),
        }
    }
}

/// Per-call replacements for the process-wide sampling defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionOverrides {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// The completion seam. Carried in `AppState` as `Arc<dyn CompletionClient>`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as the user message and returns the trimmed reply text.
    async fn complete(
        &self,
        prompt: &str,
        overrides: CompletionOverrides,
    ) -> Result<String, CompletionError>;

    fn has_credential(&self) -> bool;

    /// Cheap round trip used by the upstream health check.
    async fn verify(&self) -> bool {
        let overrides = CompletionOverrides {
            temperature: None,
            max_tokens: Some(5),
        };
        self.complete(VERIFY_PROMPT, overrides).await.is_ok()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Trimmed content of the first choice, if it has any non-blank text.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Chat-completions client for OpenAI-compatible endpoints.
///
/// The HTTP handle is built on the first call that passes the credential check
/// and reused for the lifetime of the client.
pub struct OpenAiClient {
    http: OnceCell<Client>,
    api_key: Option<String>,
    base_url: String,
    defaults: CompletionParameters,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        defaults: CompletionParameters,
    ) -> Self {
        Self {
            http: OnceCell::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            defaults,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            CompletionParameters::from_config(config),
        )
    }

    pub fn defaults(&self) -> &CompletionParameters {
        &self.defaults
    }

    fn credential(&self) -> Result<&str, CompletionError> {
        self.api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential)
    }

    async fn http(&self) -> Result<&Client, CompletionError> {
        self.http
            .get_or_try_init(|| async { Client::builder().build() })
            .await
            .map_err(CompletionError::Http)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        overrides: CompletionOverrides,
    ) -> Result<String, CompletionError> {
        // Credential check happens before anything touches the network.
        let api_key = self.credential()?;
        let http = self.http().await?;
        let params = self.defaults.with_overrides(overrides);

        let request_body = ChatRequest {
            model: &params.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        debug!(
            model = %params.model,
            temperature = params.temperature,
            max_tokens = params.max_tokens,
            prompt_chars = prompt.chars().count(),
            "Sending completion request"
        );

        let response = http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Completion API returned {status}: {message}");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyResponse)
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
