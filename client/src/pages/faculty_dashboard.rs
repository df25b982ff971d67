//! Faculty home: current and past events.

use leptos::prelude::*;

use crate::net::api::{self, use_api};
use crate::net::types::FacultyEvent;
use crate::state::auth::use_auth;
use crate::util::cancel::{cancel_on_cleanup, spawn_cancellable};

#[component]
pub fn FacultyDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let current = RwSignal::new(Vec::<FacultyEvent>::new());
    let past = RwSignal::new(Vec::<FacultyEvent>::new());
    let loading = RwSignal::new(true);
    let cancel = cancel_on_cleanup();

    let client = use_api().client();
    spawn_cancellable(
        &cancel,
        async move {
            api::fetch_faculty_events(&client).await.unwrap_or_else(|e| {
                log::error!("failed to fetch faculty events: {e}");
                (Vec::new(), Vec::new())
            })
        },
        move |(current_events, past_events)| {
            current.set(current_events);
            past.set(past_events);
            loading.set(false);
        },
    );

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading events..."</p> }>
            <div class="faculty-dashboard">
                <header class="faculty-dashboard__header">
                    <span>{move || auth.session().map(|s| s.user.email).unwrap_or_default()}</span>
                    <button class="btn" on:click=move |_| auth.logout()>
                        "Log out"
                    </button>
                </header>
                <FacultyEventSection title="Current Events" empty="No current events." events=current/>
                <FacultyEventSection title="Event History" empty="No past events found." events=past/>
            </div>
        </Show>
    }
}

#[component]
fn FacultyEventSection(
    title: &'static str,
    empty: &'static str,
    events: RwSignal<Vec<FacultyEvent>>,
) -> impl IntoView {
    view! {
        <section class="faculty-dashboard__section">
            <h2>{title}</h2>
            <Show when=move || !events.with(Vec::is_empty) fallback=move || view! { <p>{empty}</p> }>
                <ul class="faculty-dashboard__items">
                    <For
                        each=move || events.get()
                        key=|event| event.id.clone()
                        children=|event: FacultyEvent| {
                            view! {
                                <li class="faculty-dashboard__item">
                                    <h3>{event.name}</h3>
                                    <p>{event.description}</p>
                                    <p class="faculty-dashboard__date">"Date: " {event.date.unwrap_or_default()}</p>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
