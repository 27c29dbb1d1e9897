//! Notification sink port shared by the session and board contexts.

use serde::{Deserialize, Serialize};

/// Outcome category attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The operation completed and changed observable state.
    Success,
    /// The operation was rejected.
    Error,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Outcome category.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
}

/// Fire-and-forget notification sink.
///
/// Delivery must not fail from the caller's point of view; an adapter
/// that cannot deliver swallows the loss.
pub trait Notifier: Send + Sync {
    /// Delivers a notification to the user.
    fn notify(&self, kind: NotificationKind, message: &str);
}
