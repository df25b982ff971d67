//! Public signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::SignupRequest;
use crate::util::auth::LOGIN_PATH;

pub const MISSING_SIGNUP_FIELDS_MESSAGE: &str = "Name, email and password are all required.";

fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_SIGNUP_FIELDS_MESSAGE);
    }
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_signup_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked())
        {
            Ok(request) => request,
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
            match api::signup(&config, &request).await {
                Ok(()) => {
                    log::info!("account created for {}", request.email);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Sign up"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        class="login-input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="login-card__footer">"Already registered? " <A href=LOGIN_PATH>"Log in"</A></p>
            </div>
        </div>
    }
}
