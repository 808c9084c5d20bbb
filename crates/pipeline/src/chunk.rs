//! Incremental chunk translation
//!
//! Tracks how much of the combined transcript has already been sent and
//! forwards only the unsent word suffix to the translator, merging
//! results into the running output.

use std::sync::Arc;

use medbridge_core::{LanguagePair, TranslationOutput, Translator, WordCursor};

use crate::PipelineError;

/// Outcome of one translate pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Nothing new to send; no side effects
    UpToDate,
    /// A chunk was translated and merged; cursor now at `words_sent`
    Translated { words_sent: usize },
    /// Upstream returned empty text; the chunk was not consumed and will
    /// be retried on the next pass
    Deferred,
}

/// Translates the unsent suffix of a growing transcript
pub struct ChunkTranslator {
    translator: Arc<dyn Translator>,
    cursor: WordCursor,
    output: TranslationOutput,
}

impl ChunkTranslator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            cursor: WordCursor::new(),
            output: TranslationOutput::new(),
        }
    }

    /// Translate whatever part of `combined` has not been sent yet.
    ///
    /// On upstream failure nothing is mutated and the error surfaces to
    /// the caller; there is no automatic retry.
    pub async fn translate(
        &mut self,
        combined: &str,
        languages: &LanguagePair,
    ) -> Result<ChunkOutcome, PipelineError> {
        let words: Vec<&str> = combined.split_whitespace().collect();
        let sent = self.cursor.words_sent();

        if words.is_empty() || words.len() <= sent {
            return Ok(ChunkOutcome::UpToDate);
        }

        let chunk = words[sent..].join(" ");
        let source = if languages.source.is_empty() {
            None
        } else {
            Some(languages.source.as_str())
        };

        let translated = self
            .translator
            .translate(&chunk, source, &languages.target)
            .await
            .map_err(|e| PipelineError::Translation(e.to_string()))?;

        if translated.trim().is_empty() {
            tracing::warn!(
                pending = words.len() - sent,
                "Empty translation result, deferring chunk"
            );
            return Ok(ChunkOutcome::Deferred);
        }

        self.output.append(&translated);
        self.cursor.advance_to(words.len())?;

        tracing::debug!(
            sent = words.len() - sent,
            total = words.len(),
            "Merged translated chunk"
        );

        Ok(ChunkOutcome::Translated {
            words_sent: words.len(),
        })
    }

    /// Running translated output
    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    /// Words of the combined transcript already forwarded
    pub fn words_sent(&self) -> usize {
        self.cursor.words_sent()
    }

    /// Reset cursor and output (clear)
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.output.clear();
    }

    /// Reset only the cursor (new recording session; output persists)
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use medbridge_core::{Error, Result, Translator};

    /// Records every chunk it is asked to translate and returns it
    /// bracketed, so merges are visible in the output.
    #[derive(Default)]
    struct RecordingTranslator {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingTranslator {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Translator for RecordingTranslator {
        async fn translate(&self, text: &str, _source: Option<&str>, _target: &str) -> Result<String> {
            self.calls.lock().push(text.to_string());
            Ok(format!("<{}>", text))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _source: Option<&str>, _target: &str) -> Result<String> {
            Err(Error::Upstream("service unavailable".to_string()))
        }
    }

    struct EmptyTranslator;

    #[async_trait]
    impl Translator for EmptyTranslator {
        async fn translate(&self, _text: &str, _source: Option<&str>, _target: &str) -> Result<String> {
            Ok("   ".to_string())
        }
    }

    fn pair() -> LanguagePair {
        LanguagePair::default()
    }

    #[tokio::test]
    async fn test_first_chunk_sends_everything() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut chunker = ChunkTranslator::new(translator.clone());

        let outcome = chunker.translate("Hello", &pair()).await.unwrap();
        assert_eq!(outcome, ChunkOutcome::Translated { words_sent: 1 });
        assert_eq!(translator.calls(), vec!["Hello"]);
        assert_eq!(chunker.output(), "<Hello>");
        assert_eq!(chunker.words_sent(), 1);
    }

    #[tokio::test]
    async fn test_only_new_words_sent() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut chunker = ChunkTranslator::new(translator.clone());

        chunker.translate("Hello", &pair()).await.unwrap();
        let outcome = chunker.translate("Hello world", &pair()).await.unwrap();

        assert_eq!(outcome, ChunkOutcome::Translated { words_sent: 2 });
        assert_eq!(translator.calls(), vec!["Hello", "world"]);
        assert_eq!(chunker.output(), "<Hello> <world>");
    }

    #[tokio::test]
    async fn test_unchanged_text_is_noop() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut chunker = ChunkTranslator::new(translator.clone());

        chunker.translate("Hello world", &pair()).await.unwrap();
        let outcome = chunker.translate("Hello world", &pair()).await.unwrap();

        assert_eq!(outcome, ChunkOutcome::UpToDate);
        assert_eq!(translator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_only_is_noop() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut chunker = ChunkTranslator::new(translator.clone());

        let outcome = chunker.translate("   ", &pair()).await.unwrap();
        assert_eq!(outcome, ChunkOutcome::UpToDate);
        assert!(translator.calls().is_empty());
        assert!(chunker.output().is_empty());
    }

    #[tokio::test]
    async fn test_failure_mutates_nothing() {
        let mut chunker = ChunkTranslator::new(Arc::new(FailingTranslator));

        let err = chunker.translate("Hello world", &pair()).await.unwrap_err();
        assert!(matches!(err, PipelineError::Translation(_)));
        assert_eq!(chunker.words_sent(), 0);
        assert!(chunker.output().is_empty());
    }

    #[tokio::test]
    async fn test_empty_translation_defers_chunk() {
        let mut chunker = ChunkTranslator::new(Arc::new(EmptyTranslator));

        let outcome = chunker.translate("Hello", &pair()).await.unwrap();
        assert_eq!(outcome, ChunkOutcome::Deferred);
        assert_eq!(chunker.words_sent(), 0);
        assert!(chunker.output().is_empty());
    }

    #[tokio::test]
    async fn test_reset_and_reset_cursor() {
        let translator = Arc::new(RecordingTranslator::default());
        let mut chunker = ChunkTranslator::new(translator);

        chunker.translate("Hello world", &pair()).await.unwrap();

        chunker.reset_cursor();
        assert_eq!(chunker.words_sent(), 0);
        assert_eq!(chunker.output(), "<Hello world>");

        chunker.reset();
        assert_eq!(chunker.words_sent(), 0);
        assert!(chunker.output().is_empty());
    }
}
