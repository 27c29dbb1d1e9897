//! Domain model for session identity.
//!
//! The session owns at most one signed-in [`User`] at a time; the
//! authentication predicate is derived from that ownership rather than
//! tracked as a separate flag, so the two can never disagree.

mod error;
mod ids;
mod requests;
mod user;

pub use error::{AuthError, SessionError};
pub use ids::UserId;
pub use requests::{Credentials, PasswordChange, ProfileUpdate, Registration};
pub use user::{User, UserProfile};

/// Reports whether a submitted field is empty after trimming.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
