//! In-memory notification sink for tests.

use crate::notify::{Notification, NotificationKind, Notifier};
use std::sync::{Arc, RwLock};

/// Thread-safe notifier that records every delivery.
///
/// Clones share the same underlying record, so a test can keep a handle
/// while handing another to the component under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    delivered: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the notifications delivered so far.
    ///
    /// Returns an empty list when the record lock is poisoned.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .read()
            .map(|delivered| delivered.clone())
            .unwrap_or_default()
    }

    /// Returns the messages delivered so far, in delivery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.delivered()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut delivered) = self.delivered.write() {
            delivered.push(Notification {
                kind,
                message: message.to_owned(),
            });
        }
    }
}
