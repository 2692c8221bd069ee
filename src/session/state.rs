//! Session state machine and the authorization header it yields.
//!
//! ```text
//! Unauthenticated --login(token)-------------> Authenticated
//! Authenticated   --logout / rejected--------> Unauthenticated
//! ```
//!
//! Transitions are pure; persisting the result is the caller's job.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated { token: String },
}

impl SessionState {
    /// Interpret a stored value. Missing and empty tokens are both unauthenticated.
    pub fn from_stored(stored: Option<String>) -> Self {
        match stored {
            Some(token) if !token.is_empty() => Self::Authenticated { token },
            _ => Self::Unauthenticated,
        }
    }

    /// A login response arrived. Only a non-empty token changes the state.
    #[must_use]
    pub fn on_login(self, access_token: Option<&str>) -> Self {
        match access_token {
            Some(token) if !token.is_empty() => Self::Authenticated { token: token.to_owned() },
            _ => self,
        }
    }

    #[must_use]
    pub fn on_logout(self) -> Self {
        Self::Unauthenticated
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token } => Some(token),
            Self::Unauthenticated => None,
        }
    }

    pub fn auth_header(&self) -> AuthHeader {
        self.token().map_or_else(AuthHeader::empty, AuthHeader::bearer)
    }
}

/// Authorization header map: `{"Authorization": "Bearer <token>"}` or `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthHeader {
    #[serde(rename = "Authorization", skip_serializing_if = "Option::is_none")]
    authorization: Option<String>,
}

impl AuthHeader {
    pub const NAME: &'static str = "Authorization";

    pub fn empty() -> Self {
        Self { authorization: None }
    }

    pub fn bearer(token: &str) -> Self {
        Self { authorization: Some(format!("Bearer {token}")) }
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.authorization.is_none()
    }
}
