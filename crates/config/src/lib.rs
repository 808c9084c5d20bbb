//! Configuration for the live translation service
//!
//! Layered settings (files + environment) plus process-wide secrets
//! resolved once at startup.

mod settings;

pub use settings::{
    load_settings, ObservabilityConfig, Secrets, ServerConfig, Settings, TranscriptionSettings,
    TranslationSettings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying config source failed
    #[error("Config error: {0}")]
    Source(#[from] config::ConfigError),

    /// A value failed validation
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
