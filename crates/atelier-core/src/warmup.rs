//! Entrance fade-in gate
//!
//! Cards start hidden and fade in once the warm-up delay has passed. The
//! flag carries no other meaning.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay before cards are revealed
pub const DEFAULT_WARMUP: Duration = Duration::from_millis(500);

/// Loading flag that clears itself after a delay
///
/// Dropping the gate before the delay cancels the flip.
pub struct WarmupGate {
    loading: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl WarmupGate {
    /// Start loading; must be called within a tokio runtime
    pub fn start(delay: Duration) -> Self {
        let (tx, loading) = watch::channel(true);
        let deadline = tokio::time::Instant::now() + delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tx.send_replace(false);
            tracing::trace!("Warm-up finished");
        });
        Self { loading, task }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Watch the loading flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loading.clone()
    }
}

impl Drop for WarmupGate {
    fn drop(&mut self) {
        self.task.abort();
    }
}
