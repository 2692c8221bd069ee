//! Loading / error / empty messages for a listing.

use leptos::prelude::*;

use crate::state::listing::ListState;

#[component]
pub fn ListNotice<T>(state: RwSignal<ListState<T>>, noun: &'static str) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let message = move || {
        state.with(|s| {
            if let Some(error) = &s.error {
                Some((format!("Could not load {noun}: {error}"), true))
            } else if s.loading && s.items.is_empty() {
                Some((format!("Loading {noun}..."), false))
            } else if s.is_empty() {
                Some((format!("No {noun} yet."), false))
            } else {
                None
            }
        })
    };

    move || {
        message().map(|(text, is_error)| {
            let class = if is_error { "page__message page__message--error" } else { "page__message" };
            view! { <p class=class>{text}</p> }
        })
    }
}
