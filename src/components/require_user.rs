//! Page-level gate for signed-in content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` for a signed-in user; otherwise shows a placeholder
/// and redirects to `/login` once the user lookup has finished.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="page">
                        <p class="page__message">
                            {move || if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
