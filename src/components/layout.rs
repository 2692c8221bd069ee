//! Page frame: navigation bar plus the routed content area.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::session::SessionClient;
use crate::state::auth::AuthState;

/// Navigation bar with per-route links and sign-in/sign-out controls.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionClient>();

    let on_logout = move |_| {
        session.logout();
        auth.set(AuthState::signed_out());
    };

    let account_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    view! {
        <div class="layout">
            <header class="nav-bar">
                <a class="nav-bar__brand" href=AppRoute::Home.path()>"PandaRank"</a>
                <nav class="nav-bar__links">
                    {AppRoute::ALL
                        .into_iter()
                        .filter(|route| route.in_nav())
                        .map(|route| view! { <a class="nav-bar__link" href=route.path()>{route.title()}</a> })
                        .collect_view()}
                </nav>
                <div class="nav-bar__account">
                    <Show
                        when=move || auth.get().is_signed_in()
                        fallback=|| {
                            view! {
                                <a class="nav-bar__link" href=AppRoute::Login.path()>{AppRoute::Login.title()}</a>
                                <a class="button button--primary" href=AppRoute::Register.path()>
                                    {AppRoute::Register.title()}
                                </a>
                            }
                        }
                    >
                        <a class="nav-bar__link" href=AppRoute::Profile.path()>{account_name}</a>
                        <button class="button" on:click=on_logout.clone()>"Sign out"</button>
                    </Show>
                </div>
            </header>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
