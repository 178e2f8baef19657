use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::content::models::ContentKind;
use crate::llm_client::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range request body. Raised before any completion call.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to generate {kind}: {source}")]
    Generation {
        kind: ContentKind,
        #[source]
        source: CompletionError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn generation(kind: ContentKind) -> impl FnOnce(CompletionError) -> AppError {
        move |source| AppError::Generation { kind, source }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Wire shape shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error".to_string(),
                Some(msg.clone()),
            ),
            AppError::Generation { kind, source } => {
                if source.is_configuration() {
                    tracing::error!("Configuration error while generating {kind}: {source}");
                } else {
                    tracing::error!("Upstream error while generating {kind}: {source}");
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to generate {kind}"),
                    Some(source.to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_422_with_detail() {
        let response = AppError::Validation("topic: must not be blank".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Validation error", "detail": "topic: must not be blank" })
        );
    }

    #[tokio::test]
    async fn test_missing_credential_is_500_envelope() {
        let err = AppError::generation(ContentKind::Caption)(CompletionError::MissingCredential);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to generate caption");
        assert!(body["detail"].as_str().unwrap().contains("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_upstream_error_detail_carries_message() {
        let err = AppError::generation(ContentKind::VideoTags)(CompletionError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        });
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "Failed to generate video tags");
        assert_eq!(body["detail"], "API error (status 429): Rate limit reached");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err = AppError::Internal(anyhow::anyhow!("secret stack"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Internal server error", "detail": null })
        );
    }
}
