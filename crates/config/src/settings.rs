//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Translation configuration
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Transcription configuration
    #[serde(default)]
    pub transcription: TranscriptionSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.translation.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translation.debounce_ms".to_string(),
                message: "Debounce delay must be non-zero".to_string(),
            });
        }

        if self.translation.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translation.request_timeout_secs".to_string(),
                message: "Request timeout must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
        }
    }
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// Debounce delay for incremental translation (ms)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Generative model to translate with
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Base URL of the generative language API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Upstream request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_debounce_ms() -> u64 {
    300
}
fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Transcription configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSettings {
    /// Speech-to-text model
    #[serde(default = "default_whisper_model")]
    pub model: String,

    /// Base URL of the speech-to-text API
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Upstream request timeout (seconds)
    #[serde(default = "default_transcribe_timeout")]
    pub request_timeout_secs: u64,
}

fn default_whisper_model() -> String {
    "whisper-1".to_string()
}
fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_transcribe_timeout() -> u64 {
    120
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: default_whisper_model(),
            base_url: default_openai_base_url(),
            request_timeout_secs: default_transcribe_timeout(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Upstream credentials, read from the process environment once at startup
/// and injected into request handlers.
///
/// A missing key disables the corresponding client; requests that need it
/// get a structured 500, never a crash.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    /// Generative language API key (`GEMINI_API_KEY`)
    pub gemini_api_key: Option<String>,

    /// Speech-to-text API key (`OPENAI_API_KEY`)
    pub openai_api_key: Option<String>,
}

impl Secrets {
    /// Resolve secrets from the environment. Empty values count as absent.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: read_env("GEMINI_API_KEY"),
            openai_api_key: read_env("OPENAI_API_KEY"),
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            tracing::warn!("{} not set", name);
            None
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (MEDBRIDGE prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("MEDBRIDGE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.translation.debounce_ms, 300);
        assert_eq!(settings.translation.model, "gemini-1.5-flash");
        assert_eq!(settings.transcription.model, "whisper-1");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.translation.debounce_ms = 0;
        assert!(settings.validate().is_err());

        settings.translation.debounce_ms = 300;
        assert!(settings.validate().is_ok());
    }
}
