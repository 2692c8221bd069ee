//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterData, UserRole};
use crate::routes::AppRoute;
use crate::session::SessionClient;

const MIN_PASSWORD_CHARS: usize = 8;

fn validate_register_input(
    email: &str,
    password: &str,
    full_name: &str,
    role: &str,
) -> Result<RegisterData, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || password.is_empty() || full_name.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    let Some(role) = UserRole::from_form(role) else {
        return Err("Choose brand or influencer.");
    };
    Ok(RegisterData {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Brand.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let data = match validate_register_input(
            &email.get_untracked(),
            &password.get_untracked(),
            &full_name.get_untracked(),
            &role.get_untracked(),
        ) {
            Ok(data) => data,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.register(&data).await {
                Ok(()) => registered.set(true),
                Err(e) => info.set(format!("Registration failed: {}", e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text=AppRoute::Register.title()/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="input"
                        type="text"
                        autocomplete="name"
                        placeholder="Full name or brand name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="role-picker">
                        {UserRole::SELECTABLE
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label class="role-picker__option">
                                        <input
                                            type="radio"
                                            name="role"
                                            value=option.as_str()
                                            prop:checked=move || role.get() == option.as_str()
                                            on:change=move |_| role.set(option.as_str().to_owned())
                                        />
                                        {option.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>{AppRoute::Login.title()}</a>
                </p>
            </div>
        </div>
    }
}
