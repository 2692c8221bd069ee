//! Signed-in landing page with shortcuts to the listings.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::require_user::RequireUser;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome, {}", user.display_name()))
            .unwrap_or_default()
    };
    let role = move || auth.get().user.map(|user| user.role.label()).unwrap_or_default();

    view! {
        <Title text=AppRoute::Dashboard.title()/>
        <RequireUser>
            <section class="page dashboard-page">
                <header class="page__header">
                    <h1>{greeting}</h1>
                    <span class="status-chip">{role}</span>
                </header>
                <div class="tile-grid">
                    <a class="tile" href=AppRoute::Campaigns.path()>
                        <h2>{AppRoute::Campaigns.title()}</h2>
                        <p>"Browse campaigns, their budgets, and schedules."</p>
                    </a>
                    <a class="tile" href=AppRoute::Influencers.path()>
                        <h2>{AppRoute::Influencers.title()}</h2>
                        <p>"Find creators by category, audience, and engagement."</p>
                    </a>
                    <a class="tile" href=AppRoute::Profile.path()>
                        <h2>{AppRoute::Profile.title()}</h2>
                        <p>"Review and update your account details."</p>
                    </a>
                </div>
            </section>
        </RequireUser>
    }
}
