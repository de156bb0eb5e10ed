//! Transient user-visible notifications.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Default display time for a notification, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique, opaque identifier.
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Display time in milliseconds; `0` persists until removed.
    pub duration_ms: u64,
}

/// Owns the live set of notifications and their expiry timers.
///
/// Notifications are kept in insertion order, and every mutation publishes a
/// full snapshot of the sequence to subscribers. Expiry timers are retained
/// so [`NotificationStore::remove`] and [`NotificationStore::clear`] can
/// cancel them instead of letting stale callbacks fire.
///
/// Cheap to clone; clones share the same underlying state.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<NotifyInner>,
}

struct NotifyInner {
    state: watch::Sender<Vec<Notification>>,
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl NotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (state, _) = watch::channel(Vec::new());

        Self {
            inner: Arc::new(NotifyInner {
                state,
                timers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Append a notification, scheduling its removal when `duration_ms > 0`.
    ///
    /// Returns the generated id. Notifications with identical content remain
    /// distinct entries and expire on their own timers.
    pub fn show(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> String {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            duration_ms,
        };
        let id = notification.id.clone();

        debug!(id = %id, ?kind, duration_ms, "notification shown");
        self.inner.state.send_modify(|list| list.push(notification));

        if duration_ms > 0 {
            let store = self.clone();
            let expired = id.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(duration_ms)).await;
                store.remove(&expired);
            });
            self.inner
                .timers
                .lock()
                .unwrap()
                .insert(id.clone(), handle);
        }

        id
    }

    /// Show a success notification with the default duration.
    pub fn success(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Success, message, DEFAULT_DURATION_MS)
    }

    /// Show an error notification with the default duration.
    pub fn error(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Error, message, DEFAULT_DURATION_MS)
    }

    /// Show a warning notification with the default duration.
    pub fn warning(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Warning, message, DEFAULT_DURATION_MS)
    }

    /// Show an info notification with the default duration.
    pub fn info(&self, message: impl Into<String>) -> String {
        self.show(NotificationKind::Info, message, DEFAULT_DURATION_MS)
    }

    /// Remove the notification with the given id and cancel its timer.
    /// No-op when the id is not present.
    pub fn remove(&self, id: &str) {
        if let Some(handle) = self
            .inner
            .timers
            .lock()
            .unwrap()
            .remove(id)
        {
            handle.abort();
        }

        self.inner.state.send_if_modified(|list| {
            let before = list.len();
            list.retain(|notification| notification.id != id);
            list.len() != before
        });
    }

    /// Drop all notifications immediately and cancel every pending timer.
    pub fn clear(&self) {
        {
            let mut timers = self.inner.timers.lock().unwrap();
            for (_, handle) in timers.drain() {
                handle.abort();
            }
        }

        self.inner.state.send_replace(Vec::new());
    }

    /// Subscribe to sequence snapshots.
    ///
    /// The receiver observes the current snapshot and every mutation after
    /// it, each one a fully-applied, insertion-ordered sequence; dropping
    /// the receiver cancels the subscription.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.state.subscribe()
    }

    /// The current snapshot, in insertion order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.state.borrow().clone()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("len", &self.inner.state.borrow().len())
            .finish_non_exhaustive()
    }
}
