//! Speech-to-text API transcriber

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use medbridge_config::TranscriptionSettings;
use medbridge_core::{Error, Result, Transcriber};

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Transcriber backed by the `audio/transcriptions` endpoint
///
/// Requests verbose JSON with word-level timestamp granularity; only the
/// transcript text is surfaced.
pub struct WhisperTranscriber {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl WhisperTranscriber {
    pub fn new(settings: &TranscriptionSettings, api_key: String) -> Self {
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
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio: Vec<u8>, mime_type: &str) -> Result<String> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio_part = Part::bytes(audio)
            .file_name("audio.webm")
            .mime_str(if mime_type.is_empty() {
                "audio/webm"
            } else {
                mime_type
            })
            .map_err(|e| Error::Transcription(format!("Invalid audio content type: {}", e)))?;

        let form = Form::new()
            .part("file", audio_part)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .text("timestamp_granularities[]", "word");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Transcription request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Transcription service returned {}: {}",
                status, detail
            )));
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Malformed transcription response: {}", e)))?;

        Ok(body.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_defaults_empty() {
        let body: TranscriptionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.text, "");

        let body: TranscriptionResponse =
            serde_json::from_str(r#"{"text":" take 5mg twice daily ","words":[]}"#).unwrap();
        assert_eq!(body.text.trim(), "take 5mg twice daily");
    }
}
