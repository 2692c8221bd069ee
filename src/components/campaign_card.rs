//! Summary card for one campaign.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::util::format::{format_period, format_won};

#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let Campaign { title, description, status, start_date, end_date, budget, max_participants, requirements, .. } =
        campaign;
    let status_class = format!("status-chip status-chip--{}", status.as_str().to_ascii_lowercase());
    let period = format_period(&start_date, &end_date);
    let requirements = (!requirements.trim().is_empty())
        .then(|| view! { <p class="card__note">"Requirements: " {requirements}</p> });

    view! {
        <article class="card campaign-card">
            <header class="card__header">
                <h3 class="card__title">{title}</h3>
                <span class=status_class>{status.label()}</span>
            </header>
            <p class="card__body">{description}</p>
            <dl class="card__facts">
                <dt>"Period"</dt>
                <dd>{period}</dd>
                <dt>"Budget"</dt>
                <dd>{format_won(budget)}</dd>
                <dt>"Participants"</dt>
                <dd>{format!("up to {max_participants}")}</dd>
            </dl>
            {requirements}
        </article>
    }
}
