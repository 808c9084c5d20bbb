//! Core types and traits for the live translation service
//!
//! This crate provides foundational types used across all other crates:
//! - Transcript events and state
//! - Word cursor and translation output buffers
//! - Language table
//! - Error types
//! - Service traits (translator, transcriber, recognition source)

pub mod error;
pub mod language;
pub mod traits;
pub mod transcript;

pub use error::{Error, Result};
pub use language::{label_to_code, Language, LanguagePair, LANGUAGES};
pub use traits::{RecognitionEvent, RecognitionSource, Transcriber, Translator};
pub use transcript::{
    word_count, TranscriptEvent, TranscriptSegment, TranscriptState, TranslationOutput, WordCursor,
};
