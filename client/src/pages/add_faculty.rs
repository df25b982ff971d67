//! Admin form for registering a faculty member.

#[cfg(test)]
#[path = "add_faculty_test.rs"]
mod add_faculty_test;

use leptos::prelude::*;

use crate::net::api::{self, use_api};
use crate::net::types::NewFaculty;
use crate::util::cancel::{cancel_on_cleanup, spawn_cancellable};

pub const MISSING_FACULTY_FIELDS_MESSAGE: &str = "Name and email are required.";

fn build_new_faculty(name: &str, email: &str, department: &str) -> Result<NewFaculty, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return Err(MISSING_FACULTY_FIELDS_MESSAGE);
    }
    Ok(NewFaculty { name: name.to_owned(), email: email.to_owned(), department: department.trim().to_owned() })
}

#[component]
pub fn AddFacultyPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let api = use_api();
    let cancel = cancel_on_cleanup();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let faculty =
            match build_new_faculty(&name.get_untracked(), &email.get_untracked(), &department.get_untracked()) {
                Ok(faculty) => faculty,
                Err(e) => {
                    message.set(e.to_owned());
                    return;
                }
            };
        busy.set(true);
        let client = api.client();
        spawn_cancellable(
            &cancel,
            async move { api::create_faculty(&client, &faculty).await.map(|()| faculty.name) },
            move |result| {
                busy.set(false);
                match result {
                    Ok(added) => {
                        for field in [name, email, department] {
                            field.set(String::new());
                        }
                        message.set(format!("Added {added}."));
                    }
                    Err(e) => {
                        log::error!("failed to add faculty: {e}");
                        message.set(e.user_message());
                    }
                }
            },
        );
    };

    view! {
        <section class="add-faculty">
            <h1>"Add Faculty"</h1>
            <form class="event-form" on:submit=on_submit>
                <input
                    class="event-form__input"
                    type="text"
                    placeholder="Full name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="event-form__input"
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="event-form__input"
                    type="text"
                    placeholder="Department"
                    prop:value=move || department.get()
                    on:input=move |ev| department.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Add"
                </button>
                <Show when=move || !message.get().is_empty()>
                    <p class="event-form__message">{move || message.get()}</p>
                </Show>
            </form>
        </section>
    }
}
