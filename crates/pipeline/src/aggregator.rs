//! Transcript aggregation state machine
//!
//! Consumes recognition events while listening, maintains the
//! confirmed/interim buffers, and produces the combined view to debounce
//! into translation.

use medbridge_core::{TranscriptEvent, TranscriptState};

/// Aggregator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorState {
    /// Not consuming events
    Idle,
    /// Registered as the recognition event consumer
    Listening,
}

/// State machine over recognition events
#[derive(Debug)]
pub struct TranscriptAggregator {
    state: AggregatorState,
    transcript: TranscriptState,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self {
            state: AggregatorState::Idle,
            transcript: TranscriptState::new(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> AggregatorState {
        self.state
    }

    /// Transcript buffers
    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    /// Snapshot of the transcript buffers
    pub fn snapshot(&self) -> TranscriptState {
        self.transcript.clone()
    }

    /// Begin a listening session with fresh buffers.
    ///
    /// No-op when already listening (a source auto-restart resumes
    /// without touching state).
    pub fn start(&mut self) {
        if self.state == AggregatorState::Idle {
            self.transcript.clear();
            self.state = AggregatorState::Listening;
        }
    }

    /// Apply one recognition event and return the combined view to feed
    /// the translation debouncer. Events while idle are ignored.
    pub fn on_event(&mut self, event: &TranscriptEvent) -> Option<String> {
        if self.state != AggregatorState::Listening {
            return None;
        }

        self.transcript.apply(event);
        Some(self.transcript.combined())
    }

    /// End the listening session: drop the interim tail and return the
    /// confirmed text for the immediate flush.
    pub fn stop(&mut self) -> String {
        self.state = AggregatorState::Idle;
        self.transcript.clear_interim();
        self.transcript.confirmed().to_string()
    }

    /// Reset the buffers without changing lifecycle state
    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl Default for TranscriptAggregator {
    fn default() -> Self {
        Self::new()
    }
}
