//! Generative language API translator

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use medbridge_config::TranslationSettings;
use medbridge_core::{Error, Result, Translator};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// First candidate's text, trimmed
    fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()?
            .trim()
            .to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Builds the fixed clinical instruction prompt around the chunk.
///
/// Clinical terms and dosage units must survive translation verbatim.
fn build_prompt(text: &str, source: Option<&str>, target: &str) -> String {
    format!(
        "You are a medical translator.\n\
         Translate from {} to {}.\n\
         - Preserve clinical terms.\n\
         - Keep dosages/units intact.\n\
         - Return only translated text.\n\
         \n\
         Text:\n\
         {}",
        source.unwrap_or("auto-detect"),
        target,
        text
    )
}

/// Translator backed by the generative language `generateContent` endpoint
pub struct GeminiTranslator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiTranslator {
    pub fn new(settings: &TranslationSettings, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(text, source, target),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Translation request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Translation service returned {}: {}",
                status, detail
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Malformed translation response: {}", e)))?;

        body.first_text()
            .ok_or_else(|| Error::Upstream("Translation response had no candidate text".to_string()))
    }
}
