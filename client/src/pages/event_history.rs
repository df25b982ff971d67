//! Past events list for admins.

use leptos::prelude::*;

use crate::net::api::{self, or_empty, use_api};
use crate::net::types::Event;
use crate::util::cancel::{cancel_on_cleanup, spawn_cancellable};

#[component]
pub fn EventHistoryPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<Event>::new());
    let loading = RwSignal::new(true);
    let cancel = cancel_on_cleanup();

    let client = use_api().client();
    spawn_cancellable(
        &cancel,
        async move { or_empty(api::fetch_event_history(&client).await, "event history") },
        move |list| {
            events.set(list);
            loading.set(false);
        },
    );

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading event history..."</p> }>
            <Show when=move || !events.with(Vec::is_empty) fallback=|| view! { <p>"No past events found."</p> }>
                <section class="event-history">
                    <h1>"Past Events"</h1>
                    <ul class="event-history__items">
                        <For
                            each=move || events.get()
                            key=|event| event.event_id.clone()
                            children=|event: Event| {
                                view! {
                                    <li class="event-history__item">
                                        <h2>{event.event_name}</h2>
                                        <p>{event.event_description}</p>
                                        <p class="event-history__date">
                                            "Held on: " {event.event_date.unwrap_or_default()}
                                        </p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>
        </Show>
    }
}
