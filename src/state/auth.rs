//! Signed-in user state for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once at startup from `SessionClient::current_user` and updated on
//! login/logout. Page-level redirects and the navigation bar read it.

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
    /// Startup state while the current-user lookup is in flight.
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
