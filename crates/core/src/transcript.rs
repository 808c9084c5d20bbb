//! Transcript types for the incremental translation pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Count words the way the whole pipeline does: whitespace-run delimited.
///
/// Every component that compares word positions must use this so the
/// confirmed+interim concatenation and the sent-word cursor stay aligned.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One recognizer result segment, final or interim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Transcribed text
    pub text: String,

    /// Final segments are stable; interim segments may be revised
    pub is_final: bool,
}

impl TranscriptSegment {
    /// Create an interim (revisable) segment
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    /// Create a final (stable) segment
    pub fn final_segment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// One recognition event: a batch of result segments starting at
/// `result_index` in the recognizer's result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEvent {
    /// Index of the first segment in this event
    pub result_index: usize,

    /// Segments in recognizer order
    pub segments: Vec<TranscriptSegment>,
}

impl TranscriptEvent {
    pub fn new(result_index: usize, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            result_index,
            segments,
        }
    }
}

/// Confirmed + interim transcript buffers
///
/// Confirmed text only grows (append, then trim) until an explicit clear.
/// Interim text is wholly replaced on every event, never appended across
/// events.
#[derive(Debug, Clone, Default)]
pub struct TranscriptState {
    confirmed: String,
    interim: String,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one recognition event to the buffers.
    ///
    /// Interim segments within the event concatenate in order into a fresh
    /// accumulator that replaces the previous interim value; final segments
    /// append to the confirmed buffer with a separating space.
    pub fn apply(&mut self, event: &TranscriptEvent) {
        let mut interim = String::new();

        for segment in &event.segments {
            if segment.is_final {
                self.confirmed.push(' ');
                self.confirmed.push_str(&segment.text);
            } else {
                interim.push_str(&segment.text);
            }
        }

        self.confirmed = self.confirmed.trim().to_string();
        self.interim = interim;
    }

    /// Confirmed (stable) text
    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    /// Interim (revisable) text
    pub fn interim(&self) -> &str {
        &self.interim
    }

    /// Combined view: trim(confirmed + " " + interim)
    pub fn combined(&self) -> String {
        let mut text = self.confirmed.clone();
        if !self.interim.is_empty() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&self.interim);
        }
        text.trim().to_string()
    }

    /// Drop the interim tail, keeping confirmed text
    pub fn clear_interim(&mut self) {
        self.interim.clear();
    }

    /// Reset both buffers
    pub fn clear(&mut self) {
        self.confirmed.clear();
        self.interim.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.interim.is_empty()
    }
}

/// Cursor over the combined transcript: how many words have already been
/// forwarded for translation
///
/// Monotonically non-decreasing except on `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCursor {
    sent: usize,
}

impl WordCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words already forwarded
    pub fn words_sent(&self) -> usize {
        self.sent
    }

    /// Advance the cursor to `n` words sent.
    ///
    /// Fails with `InvalidCursor` when `n` is behind the current position.
    pub fn advance_to(&mut self, n: usize) -> Result<()> {
        if n < self.sent {
            return Err(Error::InvalidCursor {
                current: self.sent,
                requested: n,
            });
        }
        self.sent = n;
        Ok(())
    }

    /// Reset to zero (clear/new session only)
    pub fn reset(&mut self) {
        self.sent = 0;
    }
}

/// Append-only buffer of translated chunks, space-joined for display
#[derive(Debug, Clone, Default)]
pub struct TranslationOutput {
    text: String,
}

impl TranslationOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a translated chunk, space-joined with prior content
    pub fn append(&mut self, chunk: &str) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(chunk);
    }

    /// Display string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Reset the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
