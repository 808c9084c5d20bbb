//! Session lifecycle orchestration
//!
//! Owns the recognition source, the aggregator, the debounce channel, and
//! a single worker that serializes translate calls so results always
//! apply in initiation order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;

use medbridge_core::{
    LanguagePair, RecognitionEvent, RecognitionSource, TranscriptState, Translator,
};

use crate::aggregator::TranscriptAggregator;
use crate::chunk::ChunkTranslator;
use crate::debounce::Debouncer;
use crate::PipelineError;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Debounce delay before an incremental translate call
    pub debounce: Duration,
    /// Restart attempts after an unexpected source end
    pub restart_attempts: u32,
    /// Delay between restart attempts
    pub restart_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            restart_attempts: 3,
            restart_delay: Duration::from_millis(250),
        }
    }
}

/// Orchestrates start/stop/clear over the recognition source and the
/// incremental translation pipeline
pub struct SessionController {
    config: SessionConfig,
    languages: Arc<RwLock<LanguagePair>>,
    source: Arc<AsyncMutex<Box<dyn RecognitionSource>>>,
    aggregator: Arc<Mutex<TranscriptAggregator>>,
    chunker: Arc<AsyncMutex<ChunkTranslator>>,
    debouncer: Arc<Mutex<Debouncer<String>>>,
    recording: Arc<AtomicBool>,
    worker: JoinHandle<()>,
    event_task: Mutex<Option<JoinHandle<()>>>,
}

impl SessionController {
    /// Create a controller around a recognition source and translator.
    ///
    /// Spawns the translate worker; must be called from within a tokio
    /// runtime.
    pub fn new(
        source: Box<dyn RecognitionSource>,
        translator: Arc<dyn Translator>,
        config: SessionConfig,
    ) -> Self {
        let languages = Arc::new(RwLock::new(LanguagePair::default()));
        let chunker = Arc::new(AsyncMutex::new(ChunkTranslator::new(translator)));

        let (tx, mut rx) = mpsc::channel::<String>(16);

        // One worker, one call in flight: debounced combined texts apply
        // strictly in the order they were initiated.
        let worker = {
            let chunker = Arc::clone(&chunker);
            let languages = Arc::clone(&languages);
            tokio::spawn(async move {
                while let Some(combined) = rx.recv().await {
                    let pair = languages.read().clone();
                    let mut chunker = chunker.lock().await;
                    if let Err(e) = chunker.translate(&combined, &pair).await {
                        tracing::warn!("Incremental translation failed: {}", e);
                    }
                }
            })
        };

        let debouncer = Arc::new(Mutex::new(Debouncer::new(config.debounce, tx)));

        Self {
            config,
            languages,
            source: Arc::new(AsyncMutex::new(source)),
            aggregator: Arc::new(Mutex::new(TranscriptAggregator::new())),
            chunker,
            debouncer,
            recording: Arc::new(AtomicBool::new(false)),
            worker,
            event_task: Mutex::new(None),
        }
    }

    /// Start a recording session. No-op when already recording.
    ///
    /// Fresh transcript buffers and cursor; the translated output
    /// persists across start/stop cycles until `clear`.
    pub async fn start(&self) -> Result<(), PipelineError> {
        if self.recording.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.aggregator.lock().start();
        self.chunker.lock().await.reset_cursor();

        let (tx, rx) = mpsc::channel::<RecognitionEvent>(64);
        let language = self.languages.read().source_code().to_string();

        {
            let mut source = self.source.lock().await;
            source.set_event_callback(tx);
            if let Err(e) = source.start(&language).await {
                self.recording.store(false, Ordering::SeqCst);
                self.aggregator.lock().stop();
                return Err(PipelineError::Source(e.to_string()));
            }
        }

        let handle = tokio::spawn(event_loop(
            rx,
            Arc::clone(&self.aggregator),
            Arc::clone(&self.debouncer),
            Arc::clone(&self.source),
            Arc::clone(&self.languages),
            Arc::clone(&self.recording),
            self.config.clone(),
        ));

        let previous = self.event_task.lock().replace(handle);
        if let Some(old) = previous {
            old.abort();
        }

        tracing::info!(language = %language, "Recording started");
        Ok(())
    }

    /// Stop the recording session and immediately flush any trailing
    /// unsent words, bypassing the debounce window.
    pub async fn stop(&self) -> Result<(), PipelineError> {
        if !self.recording.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        self.debouncer.lock().cancel();

        if let Some(handle) = self.event_task.lock().take() {
            handle.abort();
        }

        {
            let mut source = self.source.lock().await;
            if let Err(e) = source.stop().await {
                tracing::warn!("Recognition source stop failed: {}", e);
            }
        }

        let confirmed = self.aggregator.lock().stop();
        tracing::info!("Recording stopped");

        let pair = self.languages.read().clone();
        let mut chunker = self.chunker.lock().await;
        if let Err(e) = chunker.translate(&confirmed, &pair).await {
            tracing::warn!("Flush translation failed: {}", e);
        }

        Ok(())
    }

    /// Reset transcript, cursor, and translated output.
    ///
    /// Does not affect the recording state.
    pub async fn clear(&self) {
        self.debouncer.lock().cancel();
        self.aggregator.lock().clear();
        self.chunker.lock().await.reset();
    }

    /// Update the language pair.
    ///
    /// Takes effect on the next translate call and the next source
    /// start/restart; already-translated text is untouched.
    pub fn set_languages(&self, source: impl Into<String>, target: impl Into<String>) {
        *self.languages.write() = LanguagePair::new(source, target);
    }

    /// Current language pair
    pub fn languages(&self) -> LanguagePair {
        self.languages.read().clone()
    }

    /// Is a recording session active?
    pub fn is_recording(&self) -> bool {
        self.recording.load(Ordering::SeqCst)
    }

    /// Snapshot of the transcript buffers
    pub fn transcript(&self) -> TranscriptState {
        self.aggregator.lock().snapshot()
    }

    /// Running translated output
    pub async fn translated(&self) -> String {
        self.chunker.lock().await.output().to_string()
    }

    /// Words of the combined transcript already forwarded
    pub async fn words_sent(&self) -> usize {
        self.chunker.lock().await.words_sent()
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.worker.abort();
        if let Some(handle) = self.event_task.lock().take() {
            handle.abort();
        }
    }
}

/// Consume recognition events in arrival order; restart the source on an
/// unexpected end while still recording.
async fn event_loop(
    mut rx: mpsc::Receiver<RecognitionEvent>,
    aggregator: Arc<Mutex<TranscriptAggregator>>,
    debouncer: Arc<Mutex<Debouncer<String>>>,
    source: Arc<AsyncMutex<Box<dyn RecognitionSource>>>,
    languages: Arc<RwLock<LanguagePair>>,
    recording: Arc<AtomicBool>,
    config: SessionConfig,
) {
    while let Some(event) = rx.recv().await {
        match event {
            RecognitionEvent::Transcript(e) => {
                let combined = aggregator.lock().on_event(&e);
                if let Some(combined) = combined {
                    debouncer.lock().schedule(combined);
                }
            }
            RecognitionEvent::Error(message) => {
                tracing::warn!("Recognition error: {}", message);
            }
            RecognitionEvent::Ended => {
                if !recording.load(Ordering::SeqCst) {
                    break;
                }

                tracing::info!("Recognition source ended unexpectedly, restarting");
                if !restart_source(&source, &languages, &config).await {
                    tracing::error!(
                        "Recognition source did not come back after {} attempts",
                        config.restart_attempts
                    );
                    recording.store(false, Ordering::SeqCst);
                    aggregator.lock().stop();
                    break;
                }
            }
        }
    }
}

/// Supervised restart: bounded attempts with a fixed delay. Transcript
/// state and cursor are left untouched.
async fn restart_source(
    source: &Arc<AsyncMutex<Box<dyn RecognitionSource>>>,
    languages: &Arc<RwLock<LanguagePair>>,
    config: &SessionConfig,
) -> bool {
    let mut attempts = 0;

    while attempts < config.restart_attempts {
        attempts += 1;

        let language = languages.read().source_code().to_string();
        match source.lock().await.start(&language).await {
            Ok(()) => {
                tracing::info!("Recognition source restarted (attempt {})", attempts);
                return true;
            }
            Err(e) => {
                tracing::warn!(
                    "Restart attempt {}/{} failed: {}",
                    attempts,
                    config.restart_attempts,
                    e
                );
                if attempts < config.restart_attempts {
                    tokio::time::sleep(config.restart_delay).await;
                }
            }
        }
    }

    false
}
