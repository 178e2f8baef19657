use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Static liveness: no upstream calls.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/upstream
/// Sends a tiny completion to check the configured credential. Always 200.
pub async fn upstream_health_handler(State(state): State<AppState>) -> Json<Value> {
    let client = state.generator.client();
    let configured = client.has_credential();
    let valid = configured && client.verify().await;
    let status = if valid { "ok" } else { "unavailable" };

    Json(json!({
        "status": status,
        "model": state.config.openai_model,
        "credential_configured": configured,
        "credential_valid": valid,
    }))
}

/// GET /
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Social Media Content Generation API",
        "version": env!("CARGO_PKG_VERSION"),
        "platforms": "Any social platform (Instagram, LinkedIn, Pinterest, YouTube, TikTok, etc.)",
        "features": [
            "AI-powered captions",
            "Platform-aware hashtags",
            "Content idea brainstorming",
            "Video titles, descriptions & tags for any platform"
        ]
    }))
}
