//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by user-aware components to coordinate identity-dependent
//! rendering. Access *decisions* never read this; they go through the
//! session cache so the two cannot drift.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Username of the signed-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Best display label: display name when present, else username.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        Some(user.name.as_deref().unwrap_or(&user.username))
    }
}
