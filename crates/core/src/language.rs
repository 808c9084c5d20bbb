//! Supported languages and the source/target selection

use serde::{Deserialize, Serialize};

/// A supported language: display label + BCP-47 recognizer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Display label, also the name sent to the translator
    pub label: &'static str,
    /// BCP-47 code for the recognition source
    pub code: &'static str,
}

/// Languages offered by the demo
pub const LANGUAGES: &[Language] = &[
    Language { label: "English", code: "en-US" },
    Language { label: "Spanish", code: "es-ES" },
    Language { label: "French", code: "fr-FR" },
    Language { label: "German", code: "de-DE" },
    Language { label: "Arabic", code: "ar-SA" },
    Language { label: "Chinese (Simplified)", code: "zh-CN" },
    Language { label: "Japanese", code: "ja-JP" },
];

/// Look up the recognizer code for a label, falling back to en-US
pub fn label_to_code(label: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|l| l.label == label)
        .map(|l| l.code)
        .unwrap_or("en-US")
}

/// Mutable source/target selection for a session
///
/// Changing either side is never retroactive: text already translated
/// stays as-is, the new pair applies from the next translate call and the
/// next recognition source start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language label; translator auto-detects when empty
    pub source: String,
    /// Target language label
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Recognizer code for the source language
    pub fn source_code(&self) -> &'static str {
        label_to_code(&self.source)
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("English", "Spanish")
    }
}
