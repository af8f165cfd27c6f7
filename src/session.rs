//! Session capability
//!
//! The identity provider owns the session. The layout reads it and asks it to
//! log out; it never stores auth state of its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial update applied by `update_user`; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
}

impl UserProfile {
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
    }
}

/// Read access plus the operations the identity provider exposes
pub trait SessionContext {
    fn user(&self) -> Option<&UserProfile>;

    /// Logged in iff a user is present
    fn is_logged_in(&self) -> bool {
        self.user().is_some()
    }

    fn login(&mut self, user: UserProfile);

    fn logout(&mut self);

    fn update_user(&mut self, patch: UserPatch);
}

/// Session kept in memory for the lifetime of the page
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    user: Option<UserProfile>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }
}

impl SessionContext for InMemorySession {
    fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn login(&mut self, user: UserProfile) {
        info!(user = %user.id, "Session started");
        self.user = Some(user);
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.id, "Session ended");
        }
    }

    fn update_user(&mut self, patch: UserPatch) {
        match self.user.as_mut() {
            Some(user) => user.apply(patch),
            None => debug!("Ignoring user update without an active session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_new_session_is_logged_out() {
        let session = InMemorySession::new();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_login_logout() {
        let mut session = InMemorySession::new();
        session.login(jane());
        assert!(session.is_logged_in());
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Jane"));

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());

        // Logging out twice is harmless
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_update_user_patches_fields() {
        let mut session = InMemorySession::logged_in(jane());
        session.update_user(UserPatch {
            name: Some("Jane Doe".to_string()),
            avatar_url: Some(Some("/avatars/jane.png".to_string())),
            ..Default::default()
        });

        let user = session.user().unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.avatar_url.as_deref(), Some("/avatars/jane.png"));
    }

    #[test]
    fn test_update_user_without_session_is_noop() {
        let mut session = InMemorySession::new();
        session.update_user(UserPatch {
            name: Some("Nobody".to_string()),
            ..Default::default()
        });
        assert!(session.user().is_none());
    }
}
