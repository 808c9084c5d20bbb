//! Application State
//!
//! Shared state across all handlers. Upstream clients are built once at
//! startup from settings + secrets; a missing credential leaves the
//! corresponding slot empty and the handler answers with a config error.

use std::sync::Arc;

use medbridge_config::{Secrets, Settings};
use medbridge_core::{Transcriber, Translator};
use medbridge_translation::{create_transcriber, create_translator};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<Settings>,
    /// Translation client, when `GEMINI_API_KEY` is set
    pub translator: Option<Arc<dyn Translator>>,
    /// Transcription client, when `OPENAI_API_KEY` is set
    pub transcriber: Option<Arc<dyn Transcriber>>,
}

impl AppState {
    /// Create application state from settings and startup secrets
    pub fn new(config: Settings, secrets: &Secrets) -> Self {
        let translator = create_translator(&config.translation, secrets.gemini_api_key.clone());
        let transcriber =
            create_transcriber(&config.transcription, secrets.openai_api_key.clone());

        Self {
            config: Arc::new(config),
            translator,
            transcriber,
        }
    }

    /// Create state with explicit services (tests)
    pub fn with_services(
        config: Settings,
        translator: Option<Arc<dyn Translator>>,
        transcriber: Option<Arc<dyn Transcriber>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translator,
            transcriber,
        }
    }
}
