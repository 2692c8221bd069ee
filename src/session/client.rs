//! Session operations: login, register, logout, current-user lookup, and the
//! local checks pages use to decide what to render.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` hand every failure back to the caller. Only
//! `current_user` recovers locally: any failure means the session is dead, so
//! the token is cleared and `None` is returned.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use super::state::{AuthHeader, SessionState};
use super::storage::{LocalTokenStore, TokenStore};
use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, BrowserTransport, Transport};
use crate::net::types::{AuthResponse, Credentials, RegisterData, User};

/// Session handle shared through Leptos context. Clones share storage and transport.
#[derive(Clone)]
pub struct SessionClient {
    config: ApiConfig,
    store: Arc<dyn TokenStore>,
    transport: Arc<dyn Transport>,
}

impl SessionClient {
    pub fn new(config: ApiConfig, store: Arc<dyn TokenStore>, transport: Arc<dyn Transport>) -> Self {
        Self { config, store, transport }
    }

    /// `localStorage` + `fetch`, as used by the running app.
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(LocalTokenStore::default()), Arc::new(BrowserTransport))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Current state as read from storage.
    pub fn state(&self) -> SessionState {
        SessionState::from_stored(self.store.get())
    }

    /// Local-only: true iff a non-empty token is stored. Says nothing about
    /// whether the server still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Local-only: bearer header for the stored token, or an empty header.
    pub fn auth_header(&self) -> AuthHeader {
        self.state().auth_header()
    }

    /// Exchange credentials for a token via `POST /auth/login`.
    ///
    /// A non-empty string `access_token` in the response is stored, replacing
    /// any previous token. The body is returned unchanged either way, so a 2xx
    /// reply never fails because of its shape.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for a non-2xx response.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(self.config.login_url()).json(credentials)?;
        let response = self.transport.send(request).await?.error_for_status()?;
        let body = AuthResponse::from_body(&response.body);

        let current = self.state();
        let next = current.clone().on_login(body.access_token());
        if next != current {
            self.persist(&next);
            log::debug!("signed in as {}", credentials.email);
        }
        Ok(body)
    }

    /// Create an account via `POST /auth/register`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for a non-2xx response.
    pub async fn register(&self, data: &RegisterData) -> Result<(), ApiError> {
        let request = ApiRequest::post(self.config.register_url()).json(data)?;
        self.transport.send(request).await?.error_for_status()?;
        Ok(())
    }

    /// Forget the stored token. Safe to call when already signed out.
    pub fn logout(&self) {
        self.persist(&self.state().on_logout());
    }

    /// Fetch `GET /users/me` for the stored token.
    ///
    /// Without a token this returns `None` and makes no request. If the
    /// request fails for any reason the token is cleared and `None` returned.
    pub async fn current_user(&self) -> Option<User> {
        let SessionState::Authenticated { token } = self.state() else {
            return None;
        };
        match self.fetch_current_user(&token).await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session rejected, clearing token: {e}");
                self.logout();
                None
            }
        }
    }

    /// Send `request` with the stored token attached.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for a non-2xx response.
    pub async fn send_authorized(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = request.with_auth(&self.auth_header());
        self.transport.send(request).await?.error_for_status()
    }

    async fn fetch_current_user(&self, token: &str) -> Result<User, ApiError> {
        let request = ApiRequest::get(self.config.current_user_url()).with_auth(&AuthHeader::bearer(token));
        self.transport.send(request).await?.error_for_status()?.json()
    }

    fn persist(&self, state: &SessionState) {
        match state.token() {
            Some(token) => self.store.set(token),
            None => self.store.delete(),
        }
    }
}

impl fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.config.base_url())
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
