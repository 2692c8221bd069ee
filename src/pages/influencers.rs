//! Influencer directory.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::influencer_card::InfluencerCard;
use crate::components::list_notice::ListNotice;
use crate::components::require_user::RequireUser;
use crate::net::api::fetch_influencers;
use crate::net::types::Influencer;
use crate::routes::AppRoute;
use crate::session::SessionClient;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;

#[component]
pub fn InfluencersPage() -> impl IntoView {
    let session = expect_context::<SessionClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let listing = RwSignal::new(ListState::<Influencer>::default());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get() || !auth.with(AuthState::is_signed_in) {
            return;
        }
        requested.set(true);
        let Some(generation) = listing.try_update(ListState::begin) else {
            return;
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = fetch_influencers(&session).await.map(|items| {
                let total = items.len();
                (items, total)
            });
            listing.update(|s| {
                s.finish(generation, result);
            });
        });
    });

    view! {
        <Title text=AppRoute::Influencers.title()/>
        <RequireUser>
            <section class="page influencers-page">
                <header class="page__header">
                    <h1>{AppRoute::Influencers.title()}</h1>
                    <span class="page__count">{move || format!("{} creators", listing.with(|s| s.total))}</span>
                </header>
                <ListNotice state=listing noun="influencers"/>
                <div class="card-grid">
                    <For
                        each=move || listing.get().items
                        key=|influencer| influencer.id
                        children=|influencer: Influencer| view! { <InfluencerCard influencer/> }
                    />
                </div>
            </section>
        </RequireUser>
    }
}
