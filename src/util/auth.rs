//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in pages apply identical unauthenticated redirect behavior. The
//! router itself does not guard routes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// True once the current-user lookup has finished without a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });
}
