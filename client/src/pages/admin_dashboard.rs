//! Admin home: current events, selection, and event creation.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::event_list::EventList;
use crate::net::api::{self, use_api};
use crate::net::types::NewEvent;
use crate::util::cancel::{cancel_on_cleanup, spawn_cancellable};

pub const MISSING_EVENT_FIELDS_MESSAGE: &str = "Name, start date and end date are required.";

fn build_new_event(name: &str, description: &str, start: &str, end: &str) -> Result<NewEvent, &'static str> {
    let (name, start, end) = (name.trim(), start.trim(), end.trim());
    if name.is_empty() || start.is_empty() || end.is_empty() {
        return Err(MISSING_EVENT_FIELDS_MESSAGE);
    }
    Ok(NewEvent {
        event_name: name.to_owned(),
        event_description: description.trim().to_owned(),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
    })
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let selected = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0_u64);
    let on_select = Callback::new(move |id: String| {
        log::debug!("selected event {id}");
        selected.set(Some(id));
    });

    view! {
        <div class="admin-dashboard">
            <h2>"Welcome to the Dashboard"</h2>
            <EventList on_select refresh/>
            <Show when=move || selected.get().is_some()>
                {move || {
                    let id = selected.get().unwrap_or_default();
                    let href = format!("/admin/event/{id}");
                    view! {
                        <div class="admin-dashboard__selected">
                            <h3>"Selected Event ID:"</h3>
                            <p>{id}</p>
                            <A href=href>"Open event dashboard"</A>
                        </div>
                    }
                }}
            </Show>
            <CreateEventForm on_created=Callback::new(move |()| refresh.update(|n| *n += 1))/>
        </div>
    }
}

#[component]
fn CreateEventForm(on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let api = use_api();
    let cancel = cancel_on_cleanup();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let event = match build_new_event(
            &name.get_untracked(),
            &description.get_untracked(),
            &start.get_untracked(),
            &end.get_untracked(),
        ) {
            Ok(event) => event,
            Err(e) => {
                message.set(e.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = api.client();
        spawn_cancellable(
            &cancel,
            async move { api::create_event(&client, &event).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        for field in [name, description, start, end] {
                            field.set(String::new());
                        }
                        message.set("Event created.".to_owned());
                        on_created.run(());
                    }
                    Err(e) => {
                        log::error!("failed to create event: {e}");
                        message.set(e.user_message());
                    }
                }
            },
        );
    };

    view! {
        <form class="event-form" on:submit=on_submit>
            <h3>"Create Event"</h3>
            <input
                class="event-form__input"
                type="text"
                placeholder="Event name"
                required
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <textarea
                class="event-form__input"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <input
                class="event-form__input"
                type="date"
                required
                prop:value=move || start.get()
                on:input=move |ev| start.set(event_target_value(&ev))
            />
            <input
                class="event-form__input"
                type="date"
                required
                prop:value=move || end.get()
                on:input=move |ev| end.set(event_target_value(&ev))
            />
            <button class="btn" type="submit" disabled=move || busy.get()>
                "Create"
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="event-form__message">{move || message.get()}</p>
            </Show>
        </form>
    }
}
