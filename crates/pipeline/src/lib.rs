//! Incremental transcript translation pipeline
//!
//! Consumes a live stream of interim/final recognition segments, forwards
//! only the not-yet-sent word suffix to a translator after a debounce
//! window, and merges results into an append-only translated output.

pub mod aggregator;
pub mod chunk;
pub mod debounce;
pub mod session;

pub use aggregator::{AggregatorState, TranscriptAggregator};
pub use chunk::{ChunkOutcome, ChunkTranslator};
pub use debounce::Debouncer;
pub use session::{SessionConfig, SessionController};

use thiserror::Error;

/// Pipeline processing errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Recognition source failed to start or stop
    #[error("Recognition source error: {0}")]
    Source(String),

    /// Translate call failed; pipeline state is untouched
    #[error("Translation error: {0}")]
    Translation(String),

    /// Event channel closed
    #[error("Channel closed")]
    ChannelClosed,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] medbridge_core::Error),
}
