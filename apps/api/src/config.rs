use anyhow::{bail, Context, Result};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 2048;

/// Application configuration loaded from environment variables.
///
/// The completion credential is optional here: a missing key is reported on the
/// first completion call, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Lets tests avoid the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let temperature = match lookup("OPENAI_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .context("OPENAI_TEMPERATURE must be a number")?,
            None => DEFAULT_TEMPERATURE,
        };
        if !(0.0..=2.0).contains(&temperature) {
            bail!("OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let max_tokens = match lookup("OPENAI_MAX_TOKENS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("OPENAI_MAX_TOKENS must be a positive integer")?,
            None => DEFAULT_MAX_TOKENS,
        };
        if max_tokens == 0 {
            bail!("OPENAI_MAX_TOKENS must be greater than zero");
        }

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Config {
            openai_api_key: lookup("OPENAI_API_KEY")
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            temperature,
            max_tokens,
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_origins,
        })
    }

    pub fn cors_is_permissive(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
