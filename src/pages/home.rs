//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Title text="PandaRank"/>
        <section class="page home-page">
            <h1 class="home-page__title">"PandaRank"</h1>
            <p class="home-page__lead">
                "Match brands with influencers, run review campaigns, and track results in one place."
            </p>
            <div class="home-page__actions">
                <Show
                    when=move || auth.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <a class="button button--primary" href=AppRoute::Register.path()>"Get started"</a>
                            <a class="button" href=AppRoute::Login.path()>"Sign in"</a>
                        }
                    }
                >
                    <a class="button button--primary" href=AppRoute::Dashboard.path()>"Go to dashboard"</a>
                </Show>
            </div>
        </section>
    }
}
