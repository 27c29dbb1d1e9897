//! Session state transitions and their notifications.

use crate::notify::{NotificationKind, Notifier};
use crate::session::domain::{
    AuthError, Credentials, ProfileUpdate, Registration, SessionError, User, is_blank,
};
use crate::session::ports::CredentialVerifier;
use std::sync::Arc;

/// Session manager owning the current-user state.
///
/// At most one user is signed in at a time. Every transition emits a
/// success or error notification through the injected sink; failed
/// transitions leave the session unchanged.
pub struct SessionManager<V, N>
where
    V: CredentialVerifier,
    N: Notifier,
{
    verifier: Arc<V>,
    notifier: Arc<N>,
    current_user: Option<User>,
}

impl<V, N> SessionManager<V, N>
where
    V: CredentialVerifier,
    N: Notifier,
{
    /// Creates a signed-out session manager.
    #[must_use]
    pub const fn new(verifier: Arc<V>, notifier: Arc<N>) -> Self {
        Self {
            verifier,
            notifier,
            current_user: None,
        }
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Reports whether a user is signed in.
    ///
    /// Holds exactly when [`Self::current_user`] returns a user; there
    /// is no separate flag that could drift out of step.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Signs in with the given credentials.
    ///
    /// On success the verified profile becomes the session user and a
    /// success notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when verification
    /// rejects the credentials; the session stays signed out (or keeps
    /// its previous user) and an error notification is emitted.
    pub fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        match self.verifier.verify_login(credentials) {
            Ok(profile) => {
                let user = User::from_profile(profile);
                tracing::debug!("user {} logged in", user.id());
                self.current_user = Some(user.clone());
                self.notifier
                    .notify(NotificationKind::Success, "Logged in successfully");
                Ok(user)
            }
            Err(err) => {
                self.notifier
                    .notify(NotificationKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingFields`] when verification rejects
    /// the registration; session state is unchanged and an error
    /// notification is emitted.
    pub fn signup(&mut self, registration: &Registration) -> Result<User, AuthError> {
        match self.verifier.verify_signup(registration) {
            Ok(profile) => {
                let user = User::from_profile(profile);
                tracing::debug!("user {} signed up", user.id());
                self.current_user = Some(user.clone());
                self.notifier
                    .notify(NotificationKind::Success, "Account created successfully");
                Ok(user)
            }
            Err(err) => {
                self.notifier
                    .notify(NotificationKind::Error, &err.to_string());
                Err(err)
            }
        }
    }

    /// Signs the current user out.
    ///
    /// Idempotent: signing out of a signed-out session is still a
    /// success.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::debug!("user {} logged out", user.id());
        }
        self.notifier
            .notify(NotificationKind::Success, "Logged out successfully");
    }

    /// Updates the signed-in user's profile.
    ///
    /// A requested password change is validated for confirmation match
    /// only; no credential store exists to persist the new password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] without a signed-in
    /// user, [`SessionError::Auth`] for a blank name or email, and
    /// [`SessionError::PasswordMismatch`] when the new password and its
    /// confirmation differ. The session user is unchanged on error.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let result = self.apply_profile_update(update);
        match &result {
            Ok(user) => {
                tracing::debug!("user {} updated profile", user.id());
                self.notifier
                    .notify(NotificationKind::Success, "Profile updated successfully");
            }
            Err(err) => {
                self.notifier
                    .notify(NotificationKind::Error, &err.to_string());
            }
        }
        result
    }

    fn apply_profile_update(&mut self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let current = self
            .current_user
            .as_ref()
            .ok_or(SessionError::NotAuthenticated)?;
        if is_blank(&update.name) || is_blank(&update.email) {
            return Err(AuthError::MissingFields.into());
        }
        if let Some(change) = &update.password_change {
            if change.new != change.confirm {
                return Err(SessionError::PasswordMismatch);
            }
        }

        let updated = current
            .clone()
            .with_contact(update.name.clone(), update.email.clone());
        self.current_user = Some(updated.clone());
        Ok(updated)
    }
}
