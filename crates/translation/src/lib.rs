//! Upstream service clients
//!
//! Translation goes through a generative language API with a fixed
//! clinical prompt; transcription goes through a speech-to-text API.
//! Both are optional at runtime: a missing credential disables the client
//! and the server answers with a structured config error instead.

mod gemini;
mod noop;
mod whisper;

pub use gemini::GeminiTranslator;
pub use noop::NoopTranslator;
pub use whisper::WhisperTranscriber;

use std::sync::Arc;

use medbridge_config::{TranscriptionSettings, TranslationSettings};
use medbridge_core::{Transcriber, Translator};

/// Create the translator, or None when the credential is absent
pub fn create_translator(
    settings: &TranslationSettings,
    api_key: Option<String>,
) -> Option<Arc<dyn Translator>> {
    match api_key {
        Some(key) => {
            tracing::info!(model = %settings.model, "Using generative translation");
            Some(Arc::new(GeminiTranslator::new(settings, key)))
        }
        None => {
            tracing::warn!("Translation disabled: missing GEMINI_API_KEY");
            None
        }
    }
}

/// Create the transcriber, or None when the credential is absent
pub fn create_transcriber(
    settings: &TranscriptionSettings,
    api_key: Option<String>,
) -> Option<Arc<dyn Transcriber>> {
    match api_key {
        Some(key) => {
            tracing::info!(model = %settings.model, "Using speech-to-text transcription");
            Some(Arc::new(WhisperTranscriber::new(settings, key)))
        }
        None => {
            tracing::warn!("Transcription disabled: missing OPENAI_API_KEY");
            None
        }
    }
}
