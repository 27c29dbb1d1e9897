//! Notification sink that forwards deliveries to `tracing`.

use crate::notify::{NotificationKind, Notifier};

/// Notifier that emits each delivery as a structured log event.
///
/// Stands in for a toast surface in headless embeddings; success maps
/// to `info`, rejection to `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a tracing-backed notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!("{message}"),
            NotificationKind::Error => tracing::error!("{message}"),
        }
    }
}
