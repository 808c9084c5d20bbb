//! HTTP Endpoints
//!
//! REST API over the upstream translation and transcription services.

use axum::{
    extract::multipart::MultipartRejection,
    extract::rejection::JsonRejection,
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_enabled = state.config.server.cors_enabled;

    let mut router = Router::new()
        .route("/api/translate", post(translate))
        .route("/api/transcribe", post(transcribe))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

/// Translate request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    source_lang: Option<String>,
    #[serde(default)]
    target_lang: Option<String>,
}

/// Translate response body
#[derive(Debug, Serialize)]
struct TranslateResponse {
    translated: String,
}

/// Translate a transcript chunk
async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ServerError> {
    let Json(request) = payload.map_err(|e| ServerError::validation(e.body_text()))?;

    let text = request.text.unwrap_or_default();
    let target = request.target_lang.unwrap_or_default();

    if text.trim().is_empty() || target.trim().is_empty() {
        return Err(ServerError::validation("Missing text/targetLang"));
    }

    let translator = state
        .translator
        .clone()
        .ok_or_else(|| ServerError::config("Missing GEMINI_API_KEY"))?;

    let source = request
        .source_lang
        .as_deref()
        .filter(|s| !s.trim().is_empty());

    let translated = translator
        .translate(&text, source, &target)
        .await
        .map_err(|e| ServerError::upstream("Translation failed", e))?;

    Ok(Json(TranslateResponse { translated }))
}

/// Transcribe response body
#[derive(Debug, Serialize)]
struct TranscribeResponse {
    text: String,
}

/// Transcribe an uploaded audio file
async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ServerError> {
    let mut multipart = multipart.map_err(|_| ServerError::validation("Expected form-data"))?;

    let mut audio: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ServerError::validation("Expected form-data"))?
    {
        if field.name() == Some("audio") {
            let mime = field.content_type().unwrap_or("audio/webm").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::Internal(format!("Failed to read upload: {}", e)))?;
            audio = Some((bytes.to_vec(), mime));
            break;
        }
    }

    let (bytes, mime) = audio.ok_or_else(|| ServerError::validation("Missing file 'audio'"))?;

    let transcriber = state
        .transcriber
        .clone()
        .ok_or_else(|| ServerError::config("Missing OPENAI_API_KEY"))?;

    let text = transcriber
        .transcribe(bytes, &mime)
        .await
        .map_err(|e| ServerError::upstream("Transcription failed", e))?;

    Ok(Json(TranscribeResponse { text }))
}

/// Health check
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "translation": state.translator.is_some(),
        "transcription": state.transcriber.is_some(),
    }))
}
