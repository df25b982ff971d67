//! Login page: email + password exchanged for a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only writer of a fresh session. A successful exchange calls
//! `AuthContext::login` and navigates to the role's home view; every failure
//! leaves the session untouched and shows an inline message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api;
use crate::state::auth::use_auth;
use crate::util::auth::home_path;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || auth.session_untracked().is_some() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&config, &email_value, &password_value).await {
                Ok(session) => {
                    let target = home_path(session.role());
                    auth.login(session.token, session.user);
                    busy.set(false);
                    navigate(target, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || auth.session().is_none()
                    fallback=move || {
                        let session = auth.session();
                        let who = session.as_ref().map(|s| format!("{} ({})", s.user.email, s.user.role)).unwrap_or_default();
                        let home = session.map_or("/", |s| home_path(s.role()));
                        view! {
                            <p class="login-message">"Signed in as " {who}</p>
                            <A href=home attr:class="login-button">"Continue"</A>
                            <button class="login-button login-button--secondary" on:click=move |_| auth.logout()>
                                "Log out"
                            </button>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_submit.clone()>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            class="login-input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="login-card__footer">
                        "Don't have an account? " <A href="/signup">"Sign up here"</A>
                    </p>
                </Show>
            </div>
        </div>
    }
}
