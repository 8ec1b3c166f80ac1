//! User-facing notifications (toasts)

use std::time::{Duration, Instant};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A message shown to the user outside the form body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// A notification on screen together with the moment it was raised
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub raised_at: Instant,
}

/// Stack of on-screen toasts that expire after a fixed duration
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl NotificationQueue {
    /// Visible duration used when nothing is configured
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    /// Drop toasts older than the configured duration
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.raised_at) < duration);
    }

    /// Dismiss the most recent toast
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.toasts.pop().map(|t| t.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Toasts oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Normal => tracing::debug!("toast: {}", notification.title),
            Severity::Destructive => tracing::debug!("destructive toast: {}", notification.title),
        }
        self.toasts.push(Toast {
            notification,
            raised_at: Instant::now(),
        });
    }
}
