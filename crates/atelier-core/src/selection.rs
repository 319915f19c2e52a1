//! Auto-expiring selection highlight
//!
//! Clicking a card highlights it for a fixed hold period. A new click
//! replaces the highlight and restarts the hold; when the hold runs out the
//! highlight clears on its own.
//!
//! ```text
//!            select(id)                     hold elapsed
//!   Idle ─────────────────▶ Highlighted ─────────────────▶ Idle
//!                            │      ▲
//!                            └──────┘ select(other): old expiry cancelled
//! ```
//!
//! At most one expiry task is pending per timer. Every `select` bumps a
//! generation counter under the state lock, so an expiry that already woke
//! for an older selection finds a stale generation and does nothing.
//! Dropping the timer cancels the pending expiry without a transition.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::types::ProjectId;

/// How long a highlight stays on screen
pub const DEFAULT_HOLD: Duration = Duration::from_millis(5000);

/// Observable selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing highlighted
    #[default]
    Idle,
    /// `id` is highlighted until `deadline`
    Highlighted { id: ProjectId, deadline: Instant },
}

impl SelectionState {
    /// The highlighted project, if any
    pub fn highlighted(&self) -> Option<ProjectId> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Highlighted { id, .. } => Some(*id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}

type ExpireHandler = Arc<dyn Fn(ProjectId) + Send + Sync>;

struct Shared {
    generation: u64,
    state: watch::Sender<SelectionState>,
}

/// Owned highlight timer for one displayed gallery
///
/// Must be used from within a tokio runtime: `select` spawns the expiry task.
pub struct SelectionTimer {
    hold: Duration,
    shared: Arc<Mutex<Shared>>,
    pending: Option<JoinHandle<()>>,
    on_expire: Option<ExpireHandler>,
}

impl SelectionTimer {
    /// Create an idle timer with the given hold period
    pub fn new(hold: Duration) -> Self {
        let (state, _) = watch::channel(SelectionState::Idle);
        Self {
            hold,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                state,
            })),
            pending: None,
            on_expire: None,
        }
    }

    /// Register a callback invoked once per natural expiry
    ///
    /// Not called for selections that are replaced, cancelled or dropped.
    pub fn with_on_expire<F>(mut self, on_expire: F) -> Self
    where
        F: Fn(ProjectId) + Send + Sync + 'static,
    {
        self.on_expire = Some(Arc::new(on_expire));
        self
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Highlight `id` for the hold period, replacing any current highlight
    pub fn select(&mut self, id: ProjectId) {
        self.abort_pending();

        let deadline = Instant::now() + self.hold;
        let generation = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared
                .state
                .send_replace(SelectionState::Highlighted { id, deadline });
            shared.generation
        };
        tracing::debug!(%id, hold_ms = self.hold.as_millis() as u64, "Selection armed");

        let shared = Arc::clone(&self.shared);
        let on_expire = self.on_expire.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let shared = shared.lock();
            if shared.generation != generation {
                return;
            }
            shared.state.send_replace(SelectionState::Idle);
            tracing::debug!(%id, "Selection expired");
            if let Some(on_expire) = on_expire {
                on_expire(id);
            }
        }));
    }

    /// Alias of [`select`](Self::select)
    pub fn arm(&mut self, id: ProjectId) {
        self.select(id);
    }

    /// Cancel the pending expiry, leaving the current state untouched
    ///
    /// No-op if nothing is pending or the expiry already fired.
    pub fn cancel(&mut self) {
        let had_pending = self.abort_pending();
        self.shared.lock().generation += 1;
        if had_pending {
            tracing::debug!("Selection expiry cancelled");
        }
    }

    /// Cancel the pending expiry and return to idle without firing the callback
    pub fn clear(&mut self) {
        self.cancel();
        self.shared.lock().state.send_replace(SelectionState::Idle);
    }

    /// Current state
    pub fn state(&self) -> SelectionState {
        *self.shared.lock().state.borrow()
    }

    /// Currently highlighted project, if any
    pub fn highlighted(&self) -> Option<ProjectId> {
        self.state().highlighted()
    }

    pub fn is_highlighted(&self, id: ProjectId) -> bool {
        self.highlighted() == Some(id)
    }

    /// Number of expiry tasks still waiting to run (0 or 1)
    pub fn pending_expiries(&self) -> usize {
        self.pending
            .as_ref()
            .map_or(0, |handle| usize::from(!handle.is_finished()))
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<SelectionState> {
        self.shared.lock().state.subscribe()
    }

    fn abort_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }
}

impl Default for SelectionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}

impl Drop for SelectionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for SelectionTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTimer")
            .field("hold", &self.hold)
            .field("state", &self.state())
            .field("pending", &self.pending_expiries())
            .finish()
    }
}
