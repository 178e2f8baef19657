// Cross-cutting prompt fragments for the completion client.
// Per-kind instruction templates live in content::prompts.

/// System message sent ahead of every user prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant specialized in creating engaging social media content.";

/// Minimal prompt used to check that the configured credential is accepted upstream.
pub const VERIFY_PROMPT: &str = "Hello";
