//! Summary card for one influencer profile.

use leptos::prelude::*;

use crate::net::types::Influencer;
use crate::util::format::{format_count, format_rate};

#[component]
pub fn InfluencerCard(influencer: Influencer) -> impl IntoView {
    let followers = format_count(influencer.total_followers());
    let engagement = format_rate(influencer.stats.engagement_rate);
    let availability = if influencer.available_for_collaboration { "Open to collaborations" } else { "Not available" };
    let platforms = influencer
        .platforms
        .iter()
        .map(|p| p.platform_name.clone())
        .collect::<Vec<_>>()
        .join(" · ");
    let Influencer { id, bio, categories, .. } = influencer;

    view! {
        <article class="card influencer-card">
            <header class="card__header">
                <h3 class="card__title">{format!("Influencer #{id}")}</h3>
                <span class="card__meta">{availability}</span>
            </header>
            <p class="card__body">{bio.unwrap_or_default()}</p>
            <ul class="chip-list">
                {categories.into_iter().map(|c| view! { <li class="chip">{c}</li> }).collect_view()}
            </ul>
            <dl class="card__facts">
                <dt>"Followers"</dt>
                <dd>{followers}</dd>
                <dt>"Engagement"</dt>
                <dd>{engagement}</dd>
                <dt>"Platforms"</dt>
                <dd>{platforms}</dd>
            </dl>
        </article>
    }
}
