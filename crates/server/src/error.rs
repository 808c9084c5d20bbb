//! Boundary error handling
//!
//! Every route handler returns `ServerError` on failure; it renders as a
//! structured JSON body with an HTTP status so no exception ever reaches
//! the transport layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Server errors mapped onto HTTP responses
#[derive(Debug, Error)]
pub enum ServerError {
    /// Required request field missing → 400
    #[error("{0}")]
    Validation(String),

    /// Missing credential → 500, logged with the missing variable
    #[error("{0}")]
    Config(String),

    /// External service failed → 500 with upstream detail
    #[error("{message}")]
    Upstream {
        message: String,
        detail: Option<String>,
    },

    /// Anything else → 500
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ServerError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ServerError::Config(msg.into())
    }

    pub fn upstream(message: impl Into<String>, detail: impl ToString) -> Self {
        ServerError::Upstream {
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Validation(msg) => tracing::debug!("Request rejected: {}", msg),
            ServerError::Config(msg) => tracing::error!("Configuration error: {}", msg),
            ServerError::Upstream { message, detail } => {
                tracing::error!("Upstream error: {} ({:?})", message, detail)
            }
            ServerError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }

        let status = self.status();
        let body = match self {
            ServerError::Upstream {
                message,
                detail: Some(detail),
            } => json!({ "error": message, "detail": detail }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::validation("Missing text/targetLang").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::config("Missing GEMINI_API_KEY").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::upstream("Translation failed", "boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_renders_400() {
        let response = ServerError::validation("Missing text/targetLang").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
