//! Campaign listing with a status filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::campaign_card::CampaignCard;
use crate::components::list_notice::ListNotice;
use crate::components::require_user::RequireUser;
use crate::net::api::fetch_campaigns;
use crate::net::types::{Campaign, CampaignStatus};
use crate::routes::AppRoute;
use crate::session::SessionClient;
use crate::state::auth::AuthState;
use crate::state::listing::ListState;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let session = expect_context::<SessionClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let listing = RwSignal::new(ListState::<Campaign>::default());
    let filter = RwSignal::new(None::<CampaignStatus>);

    // Refetch whenever the filter changes, once a user is known.
    Effect::new(move || {
        let status = filter.get();
        if !auth.with(AuthState::is_signed_in) {
            return;
        }
        // A quicker filter change supersedes this fetch; its result is dropped.
        let Some(generation) = listing.try_update(ListState::begin) else {
            return;
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = fetch_campaigns(&session, status).await.map(|list| {
                let total = usize::try_from(list.total).unwrap_or_default();
                (list.items, total)
            });
            listing.update(|s| {
                if !s.finish(generation, result) {
                    log::debug!("dropped stale campaign listing for {status:?}");
                }
            });
        });
    });

    view! {
        <Title text=AppRoute::Campaigns.title()/>
        <RequireUser>
            <section class="page campaigns-page">
                <header class="page__header">
                    <h1>{AppRoute::Campaigns.title()}</h1>
                    <span class="page__count">{move || format!("{} total", listing.with(|s| s.total))}</span>
                    <select
                        class="input input--select"
                        on:change=move |ev| filter.set(CampaignStatus::parse(&event_target_value(&ev)))
                    >
                        <option value="">"All statuses"</option>
                        {CampaignStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                </header>
                <ListNotice state=listing noun="campaigns"/>
                <div class="card-grid">
                    <For
                        each=move || listing.get().items
                        key=|campaign| campaign.id
                        children=|campaign: Campaign| view! { <CampaignCard campaign/> }
                    />
                </div>
            </section>
        </RequireUser>
    }
}
