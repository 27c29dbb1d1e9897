//! Request payloads for session operations.

use serde::{Deserialize, Serialize};

/// Login form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Submitted email.
    pub email: String,
    /// Submitted password.
    pub password: String,
}

impl Credentials {
    /// Creates a login payload.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Signup form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Submitted display name.
    pub name: String,
    /// Submitted email.
    pub email: String,
    /// Submitted password.
    pub password: String,
}

impl Registration {
    /// Creates a signup payload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Requested password change within a profile update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// Current password, re-entered for confirmation.
    pub current: String,
    /// Proposed new password.
    pub new: String,
    /// Re-typed new password; must match `new`.
    pub confirm: String,
}

/// Profile settings form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Replacement display name.
    pub name: String,
    /// Replacement email.
    pub email: String,
    /// Optional password change, validated for confirmation match.
    pub password_change: Option<PasswordChange>,
}

impl ProfileUpdate {
    /// Creates a profile update without a password change.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_change: None,
        }
    }

    /// Attaches a password change request.
    #[must_use]
    pub fn with_password_change(
        mut self,
        current: impl Into<String>,
        new: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        self.password_change = Some(PasswordChange {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        });
        self
    }
}
