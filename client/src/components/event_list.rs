//! Current-events list used on the admin home view.

use leptos::prelude::*;

use crate::net::api::{self, or_empty, use_api};
use crate::net::types::Event;
use crate::util::cancel::{cancel_on_cleanup, spawn_cancellable};

/// Lists `GET /events`, reloading whenever `refresh` changes.
#[component]
pub fn EventList(on_select: Callback<String>, #[prop(into)] refresh: Signal<u64>) -> impl IntoView {
    let events = RwSignal::new(Vec::<Event>::new());
    let api = use_api();
    let cancel = cancel_on_cleanup();

    Effect::new(move || {
        refresh.track();
        let client = api.client();
        spawn_cancellable(
            &cancel,
            async move { or_empty(api::fetch_events(&client).await, "events") },
            move |list| events.set(list),
        );
    });

    view! {
        <section class="event-list">
            <h1>"Current Events"</h1>
            <ul class="event-list__items">
                <For
                    each=move || events.get()
                    key=|event| event.event_id.clone()
                    children=move |event: Event| {
                        let id = event.event_id.clone();
                        view! {
                            <li class="event-list__item" on:click=move |_| on_select.run(id.clone())>
                                <h2>{event.event_name}</h2>
                                <p>{event.event_description}</p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
