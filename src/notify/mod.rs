//! User-facing notification boundary.
//!
//! The board store and session manager report operation outcomes
//! through the [`Notifier`] port and never consume a delivery result;
//! how a notification reaches the user (toast surface, log stream) is
//! an adapter concern.

pub mod adapters;
mod port;

pub use port::{Notification, NotificationKind, Notifier};
