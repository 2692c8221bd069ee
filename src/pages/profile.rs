//! Account details with name editing and sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::require_user::RequireUser;
use crate::net::api::update_current_user;
use crate::net::types::{ProfileUpdate, User};
use crate::routes::AppRoute;
use crate::session::SessionClient;
use crate::state::auth::AuthState;

/// Build the update for a name edit, or explain why there is nothing to send.
fn profile_update(current: Option<&User>, full_name: &str) -> Result<ProfileUpdate, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your name.");
    }
    if current.is_some_and(|user| user.full_name == full_name) {
        return Err("Nothing to change.");
    }
    Ok(ProfileUpdate { full_name: Some(full_name.to_owned()), email: None })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionClient>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let full_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Keep the draft in sync with the loaded account.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            full_name.set(user.full_name);
        }
    });

    let save_session = session.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = auth.get_untracked().user;
        let update = match profile_update(current.as_ref(), &full_name.get_untracked()) {
            Ok(update) => update,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        let session = save_session.clone();
        leptos::task::spawn_local(async move {
            match update_current_user(&session, &update).await {
                Ok(user) => {
                    auth.update(|state| state.user = Some(user));
                    info.set("Profile saved.".to_owned());
                }
                Err(e) => info.set(format!("Save failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    let on_logout = move |_| {
        session.logout();
        auth.set(AuthState::signed_out());
    };

    let field = move |pick: fn(&User) -> String| move || auth.get().user.as_ref().map(pick).unwrap_or_default();

    view! {
        <Title text=AppRoute::Profile.title()/>
        <RequireUser>
            <section class="page profile-page">
                <header class="page__header">
                    <h1>{AppRoute::Profile.title()}</h1>
                </header>
                <dl class="card__facts profile-page__facts">
                    <dt>"Email"</dt>
                    <dd>{field(|u| u.email.clone())}</dd>
                    <dt>"Role"</dt>
                    <dd>{field(|u| u.role.label().to_owned())}</dd>
                    <dt>"Status"</dt>
                    <dd>{field(|u| if u.is_active { "Active".to_owned() } else { "Inactive".to_owned() })}</dd>
                    <dt>"Member since"</dt>
                    <dd>{field(|u| u.created_at.clone().unwrap_or_else(|| "-".to_owned()))}</dd>
                </dl>
                <form class="auth-form profile-page__form" on:submit=on_save.clone()>
                    <label class="input-label" for="profile-full-name">"Name"</label>
                    <input
                        id="profile-full-name"
                        class="input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <button class="button button--danger" on:click=on_logout.clone()>"Sign out"</button>
            </section>
        </RequireUser>
    }
}
