//! Transient, stackable user notifications.
//!
//! [`NotificationCenter::notify`] appends a notification to the container and
//! schedules its removal after the configured timeout (5 s by default). The
//! returned [`NotificationHandle`] dismisses it early and cancels the timer.
//! Removal is idempotent on both paths, so a manual dismissal racing the
//! expiry never removes twice.
//!
//! Identical messages are not de-duplicated.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use library_client::ClientError;
use tokio::task::AbortHandle;

/// Default auto-dismiss delay.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Visual and semantic category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one notification within its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

/// A message currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Where notifications are drawn. Called with the container lock released.
pub trait NotificationDisplay: Send + Sync {
    fn show(&self, notification: &Notification);
    fn remove(&self, id: NotificationId);
}

struct Inner {
    active: Mutex<Vec<Notification>>,
    next_id: AtomicU64,
    timeout: Duration,
    display: Option<Box<dyn NotificationDisplay>>,
}

impl Inner {
    fn active(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove `id` if still present. Returns whether anything was removed.
    fn remove(&self, id: NotificationId) -> bool {
        let removed = {
            let mut active = self.active();
            let before = active.len();
            active.retain(|n| n.id != id);
            active.len() != before
        };

        if removed {
            if let Some(display) = &self.display {
                display.remove(id);
            }
        }
        removed
    }
}

/// The notification container.
///
/// Cloning is cheap; clones share the same container.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    /// A headless center: notifications are tracked but drawn nowhere.
    pub fn new(timeout: Duration) -> Self {
        Self::build(timeout, None)
    }

    /// A center that draws through `display`.
    pub fn with_display(timeout: Duration, display: impl NotificationDisplay + 'static) -> Self {
        Self::build(timeout, Some(Box::new(display)))
    }

    fn build(timeout: Duration, display: Option<Box<dyn NotificationDisplay>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                active: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                timeout,
                display,
            }),
        }
    }

    /// Append a notification and schedule its expiry.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let notification = Notification {
            id: NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed)),
            message: message.into(),
            severity,
        };
        let id = notification.id;

        tracing::debug!(%severity, message = %notification.message, "notification shown");
        if let Some(display) = &self.inner.display {
            display.show(&notification);
        }
        self.inner.active().push(notification);

        let weak = Arc::downgrade(&self.inner);
        let timeout = self.inner.timeout;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        });

        NotificationHandle {
            id,
            center: Arc::downgrade(&self.inner),
            timer: timer.abort_handle(),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationHandle {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationHandle {
        self.notify(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationHandle {
        self.notify(message, Severity::Warning)
    }

    /// Surface a failed action: one notification per field error for
    /// validation failures, otherwise a single one with the error's message.
    pub fn report(&self, error: &ClientError) {
        match error.as_api() {
            Some(api) if api.is_validation() && !api.errors.is_empty() => {
                for field_error in &api.errors {
                    self.error(field_error.message.clone());
                }
            }
            _ => {
                self.error(error.to_string());
            }
        }
    }

    /// Snapshot of the notifications currently shown, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.inner.active().clone()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("timeout", &self.inner.timeout)
            .field("active", &self.inner.active().len())
            .finish_non_exhaustive()
    }
}

/// Handle to one shown notification.
///
/// Dropping the handle leaves the notification to expire on its own.
#[derive(Debug)]
pub struct NotificationHandle {
    id: NotificationId,
    center: Weak<Inner>,
    timer: AbortHandle,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Remove the notification now and cancel its expiry timer.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&self) -> bool {
        self.timer.abort();
        self.center
            .upgrade()
            .is_some_and(|inner| inner.remove(self.id))
    }
}
