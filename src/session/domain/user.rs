//! Session user identity types.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Verified account attributes supplied by a credential verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl UserProfile {
    /// Creates a profile from a name and an email.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Signed-in user identity.
///
/// Created when a session begins and discarded at logout; the identifier
/// never changes while the session lasts, even across profile updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Mints a session user from a verified profile.
    #[must_use]
    pub(crate) fn from_profile(profile: UserProfile) -> Self {
        Self {
            id: UserId::new(),
            name: profile.name,
            email: profile.email,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the user with replacement contact details, keeping the id.
    #[must_use]
    pub(crate) fn with_contact(mut self, name: String, email: String) -> Self {
        self.name = name;
        self.email = email;
        self
    }
}
