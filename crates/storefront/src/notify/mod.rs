//! Ephemeral toast notifications.
//!
//! Fire-and-forget: callers enqueue a transient notice that self-removes
//! after its duration (default 3 seconds; a duration of exactly zero means
//! "never auto-remove"). Not business logic - the cart store only calls
//! this interface, it does not own it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

/// Default time before a toast self-removes.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Identifies an enqueued toast, for early dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

/// Callback invoked when the toast's action button is activated.
pub type ToastAction = Arc<dyn Fn() + Send + Sync>;

/// Options for enqueuing a toast.
#[derive(Clone, Default)]
pub struct ToastOptions {
    /// Message shown to the visitor.
    pub message: String,
    /// Time before auto-removal; `None` uses the default, zero disables it.
    pub duration: Option<Duration>,
    /// Label of an optional action button.
    pub action_label: Option<String>,
    /// Invoked when the action button is activated.
    pub on_action: Option<ToastAction>,
}

impl ToastOptions {
    /// A plain message with the default duration.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// An active toast.
#[derive(Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub action_label: Option<String>,
    on_action: Option<ToastAction>,
}

impl Toast {
    /// Run the toast's action callback, if it has one.
    pub fn activate(&self) {
        if let Some(action) = &self.on_action {
            action();
        }
    }
}

impl std::fmt::Debug for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("action_label", &self.action_label)
            .field("has_action", &self.on_action.is_some())
            .finish()
    }
}

/// Shared queue of active toasts.
///
/// Cheaply cloneable; renderers read [`active`](Self::active) snapshots.
/// Expiry timers are spawned on the tokio runtime, so [`show`](Self::show)
/// must be called from within one.
#[derive(Clone, Default)]
pub struct ToastHub {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast and schedule its auto-removal.
    pub fn show(&self, options: ToastOptions) -> ToastId {
        let id = ToastId(Uuid::new_v4());
        let duration = options.duration.unwrap_or(DEFAULT_TOAST_DURATION);
        let toast = Toast {
            id,
            message: options.message,
            action_label: options.action_label,
            on_action: options.on_action,
        };

        self.lock().push(toast);
        debug!(toast_id = ?id, "Toast enqueued");

        if !duration.is_zero() {
            let hub = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(duration).await;
                hub.dismiss(id);
            });
        }

        id
    }

    /// Remove a toast early; no-op if it already expired.
    pub fn dismiss(&self, id: ToastId) {
        self.lock().retain(|t| t.id != id);
    }

    /// Snapshot of the currently active toasts, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ToastHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHub")
            .field("active", &self.lock().len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let hub = ToastHub::new();
        hub.show(ToastOptions {
            duration: Some(Duration::from_secs(1)),
            ..ToastOptions::message("saved")
        });
        assert_eq!(hub.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(hub.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_never_expires() {
        let hub = ToastHub::new();
        let id = hub.show(ToastOptions {
            duration: Some(Duration::ZERO),
            ..ToastOptions::message("sticky")
        });

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(hub.active().len(), 1);

        hub.dismiss(id);
        assert!(hub.active().is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_removes_only_target() {
        let hub = ToastHub::new();
        let first = hub.show(ToastOptions {
            duration: Some(Duration::ZERO),
            ..ToastOptions::message("one")
        });
        hub.show(ToastOptions {
            duration: Some(Duration::ZERO),
            ..ToastOptions::message("two")
        });

        hub.dismiss(first);
        let active = hub.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active.first().map(|t| t.message.as_str()), Some("two"));
    }

    #[tokio::test]
    async fn test_action_callback_fires() {
        let hub = ToastHub::new();
        let fired = Arc::new(AtomicU32::new(0));

        let fired_cb = fired.clone();
        hub.show(ToastOptions {
            duration: Some(Duration::ZERO),
            action_label: Some("Undo".to_string()),
            on_action: Some(Arc::new(move || {
                fired_cb.fetch_add(1, Ordering::SeqCst);
            })),
            ..ToastOptions::message("removed from cart")
        });

        let active = hub.active();
        active.first().unwrap().activate();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
