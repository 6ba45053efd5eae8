//! Notification lifecycle for action events.
//!
//! Each posted event stays live for a fixed display window, then removes
//! itself. Expiry is a per-event tokio timer task whose handle is retained,
//! so dismissal and `clear` cancel the pending removal instead of letting a
//! stale timer fire against a fresh collection. The live list is behind a
//! mutex that is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};
use uuid::Uuid;

use crate::actions::ActionEvent;

/// How long a notification stays live before automatic removal.
pub const DISPLAY_TTL: Duration = Duration::from_millis(4000);

struct Live {
    event: ActionEvent,
    expiry: JoinHandle<()>,
}

/// Ordered collection of live action notifications.
///
/// Clones share the same collection. Posting requires a tokio runtime, since
/// expiry is scheduled as a spawned task.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    live: Arc<Mutex<Vec<Live>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and schedule its removal after [`DISPLAY_TTL`].
    pub fn post(&self, event: ActionEvent) {
        let id = event.id;
        // The display window is measured from insertion, so the deadline is
        // fixed here rather than when the timer task gets its first poll.
        let deadline = Instant::now() + DISPLAY_TTL;
        let shared = Arc::clone(&self.live);
        let expiry = tokio::spawn(async move {
            sleep_until(deadline).await;
            let mut live = lock(&shared);
            if let Some(pos) = live.iter().position(|n| n.event.id == id) {
                debug!("notification {} expired", id);
                live.remove(pos);
            }
        });
        lock(&self.live).push(Live { event, expiry });
    }

    /// Remove an event immediately and cancel its expiry. Idempotent:
    /// removing an absent id is a no-op.
    pub fn dismiss(&self, id: Uuid) {
        let mut live = lock(&self.live);
        if let Some(pos) = live.iter().position(|n| n.event.id == id) {
            let removed = live.remove(pos);
            removed.expiry.abort();
            debug!("notification {} dismissed", id);
        }
    }

    /// Cancel all pending expirations and empty the collection.
    pub fn clear(&self) {
        let mut live = lock(&self.live);
        for entry in live.drain(..) {
            entry.expiry.abort();
        }
    }

    /// Snapshot of the live events, oldest first.
    pub fn live(&self) -> Vec<ActionEvent> {
        lock(&self.live).iter().map(|n| n.event.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.live).is_empty()
    }
}

fn lock(live: &Arc<Mutex<Vec<Live>>>) -> MutexGuard<'_, Vec<Live>> {
    // A panic while holding this lock leaves only a display list behind;
    // recover the data rather than poisoning every later call.
    live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
