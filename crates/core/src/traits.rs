//! Service traits
//!
//! Abstract seams for the external collaborators: the translation and
//! transcription services and the speech recognition source.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::transcript::TranscriptEvent;

/// Text-to-text translation service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`. `source` of None means auto-detect.
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String>;
}

/// Audio-to-text transcription service
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an uploaded audio payload
    async fn transcribe(&self, audio: Vec<u8>, mime_type: &str) -> Result<String>;
}

/// Event pushed by a recognition source
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// A batch of result segments
    Transcript(TranscriptEvent),
    /// The source ended; unexpected while listening (provider timeout)
    Ended,
    /// Recognition error, source may still continue
    Error(String),
}

/// Continuous speech recognition source
///
/// The source pushes `RecognitionEvent`s onto the registered channel; the
/// pipeline consumes them in arrival order. Implementations are external
/// collaborators (a browser recognizer bridge, a test script).
#[async_trait]
pub trait RecognitionSource: Send + Sync {
    /// Register the consumer channel. Must be called before `start`.
    fn set_event_callback(&mut self, tx: mpsc::Sender<RecognitionEvent>);

    /// Begin recognizing in `language` (BCP-47 code). Restarting after an
    /// end keeps the same callback channel.
    async fn start(&mut self, language: &str) -> Result<()>;

    /// Stop recognizing. The source emits `Ended` once stopped.
    async fn stop(&mut self) -> Result<()>;
}
