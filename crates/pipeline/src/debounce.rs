//! Delay/coalesce wrapper for repeated triggers
//!
//! A true debounce: every `schedule` restarts the delay from zero, and
//! only the most recently scheduled input is delivered when the delay
//! elapses without another trigger.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Debouncer delivering the last scheduled input onto a channel after a
/// quiet period
pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    tx: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that delivers onto `tx` after `delay`
    pub fn new(delay: Duration, tx: mpsc::Sender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Record `input` as the pending argument and restart the delay.
    ///
    /// Any earlier pending input is discarded. Must be called from within
    /// a tokio runtime.
    pub fn schedule(&mut self, input: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(input).await;
        }));
    }

    /// Clear any pending timer without delivering
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Is a delivery still pending?
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_coalesces_to_last_input() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(Duration::from_millis(300), tx);

        debouncer.schedule("one");
        debouncer.schedule("two");
        debouncer.schedule("three");

        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(rx.recv().await, Some("three"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_restarts_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(Duration::from_millis(300), tx);

        debouncer.schedule("first");
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Rescheduling inside the window starts the elapsed time over
        debouncer.schedule("second");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(rx.recv().await, Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_delivery() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(Duration::from_millis(300), tx);

        debouncer.schedule("pending");
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_suppresses_delivery() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(300), tx);
            debouncer.schedule("pending");
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
