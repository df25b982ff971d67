//! Per-event dashboard: details, faculty assignments, and the assign form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the admin home via `/admin/event/{event_id}`. Faculty records
//! carry assignments for every event; this view filters them down to the
//! current event and resolves role names from `/roles`.

#[cfg(test)]
#[path = "event_dashboard_test.rs"]
mod event_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::{self, ApiClient, or_empty, use_api};
use crate::net::types::{AssignmentRequest, Event, EventRole, Faculty, RemoveAssignmentRequest};
use crate::util::cancel::{CancelToken, cancel_on_cleanup, spawn_cancellable};

pub const MISSING_ASSIGNMENT_FIELDS_MESSAGE: &str = "Select a faculty member and a role.";
pub const REMOVE_CONFIRM_MESSAGE: &str = "Are you sure you want to remove this assignment?";

/// One row of the assignment table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentRow {
    pub key: String,
    pub assignment_id: Option<String>,
    pub faculty_id: String,
    pub faculty_name: String,
    pub role_id: String,
    pub role_label: String,
    pub points: i64,
}

/// Flatten faculty assignments for `event_id`, labelling roles by name when
/// the role list knows them.
fn assignment_rows(faculty: &[Faculty], roles: &[EventRole], event_id: &str) -> Vec<AssignmentRow> {
    faculty
        .iter()
        .flat_map(|member| {
            member.assignments.iter().filter(|a| a.event_id == event_id).enumerate().map(move |(index, a)| {
                let role_label = roles
                    .iter()
                    .find(|r| r.id == a.role_id)
                    .map_or_else(|| a.role_id.clone(), |r| r.name.clone());
                AssignmentRow {
                    key: format!("{}-{index}", member.id),
                    assignment_id: a.id.clone(),
                    faculty_id: member.id.clone(),
                    faculty_name: member.name.clone(),
                    role_id: a.role_id.clone(),
                    role_label,
                    points: a.points,
                }
            })
        })
        .collect()
}

/// Integer field semantics: unparsable input is 0 and negatives clamp to 0.
fn parse_points(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map_or(0, |n| n.max(0))
}

fn build_assignment(faculty_id: &str, role_id: &str, points: &str) -> Result<AssignmentRequest, &'static str> {
    if faculty_id.is_empty() || role_id.is_empty() {
        return Err(MISSING_ASSIGNMENT_FIELDS_MESSAGE);
    }
    Ok(AssignmentRequest { faculty_id: faculty_id.to_owned(), role_id: role_id.to_owned(), points: parse_points(points) })
}

/// Delete request for a row. Rows the backend sent without an id cannot be
/// removed.
fn build_removal(row: &AssignmentRow) -> Option<RemoveAssignmentRequest> {
    row.assignment_id
        .as_ref()
        .map(|id| RemoveAssignmentRequest { assignment_id: id.clone(), deduct_points: true })
}

/// Claim `busy` for one request. Returns `false` while another is in flight.
fn begin_request(busy: RwSignal<bool>) -> bool {
    if busy.get_untracked() {
        return false;
    }
    busy.set(true);
    true
}

fn confirm_removal() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(REMOVE_CONFIRM_MESSAGE).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Calendar date of an ISO-8601 timestamp; other strings pass through.
fn date_only(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

fn reload_faculty(cancel: &CancelToken, client: ApiClient, faculty: RwSignal<Vec<Faculty>>) {
    spawn_cancellable(
        cancel,
        async move { or_empty(api::fetch_faculty(&client).await, "faculty") },
        move |list| faculty.set(list),
    );
}

#[component]
pub fn EventDashboardPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = Memo::new(move |_| params.with(|p| p.get("event_id")).unwrap_or_default());

    let event = RwSignal::new(None::<Event>);
    let faculty = RwSignal::new(Vec::<Faculty>::new());
    let roles = RwSignal::new(Vec::<EventRole>::new());
    let loading = RwSignal::new(true);
    let api = use_api();
    let cancel = cancel_on_cleanup();

    let view_cancel = cancel.clone();
    let load_api = api.clone();
    Effect::new(move |previous: Option<CancelToken>| {
        let id = event_id.get();
        let run = view_cancel.restart(previous);
        loading.set(true);
        let client = load_api.client();
        spawn_cancellable(
            &run,
            async move {
                let details = api::fetch_event(&client, &id)
                    .await
                    .inspect_err(|e| log::error!("failed to fetch event {id}: {e}"))
                    .ok();
                let members = or_empty(api::fetch_faculty(&client).await, "faculty");
                let role_list = or_empty(api::fetch_roles(&client).await, "roles");
                (details, members, role_list)
            },
            move |(details, members, role_list)| {
                event.set(details);
                faculty.set(members);
                roles.set(role_list);
                loading.set(false);
            },
        );
        run
    });

    // Assign/edit form state.
    let show_form = RwSignal::new(false);
    let form_faculty = RwSignal::new(String::new());
    let form_role = RwSignal::new(String::new());
    let form_points = RwSignal::new("0".to_owned());
    let form_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_cancel = cancel.clone();
    let submit_api = api.clone();
    let on_assign = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request =
            match build_assignment(&form_faculty.get_untracked(), &form_role.get_untracked(), &form_points.get_untracked()) {
                Ok(request) => request,
                Err(e) => {
                    form_message.set(e.to_owned());
                    return;
                }
            };
        if !begin_request(busy) {
            return;
        }
        let client = submit_api.client();
        let reload_client = client.clone();
        let id = event_id.get_untracked();
        let cancel = submit_cancel.clone();
        spawn_cancellable(
            &submit_cancel,
            async move { api::assign_role(&client, &id, &request).await },
            move |result| match result {
                Ok(()) => {
                    busy.set(false);
                    show_form.set(false);
                    form_message.set(String::new());
                    reload_faculty(&cancel, reload_client, faculty);
                }
                Err(e) => {
                    log::error!("failed to assign role: {e}");
                    busy.set(false);
                    form_message.set(e.user_message());
                }
            },
        );
    };
    let on_assign = StoredValue::new(on_assign);

    let remove_cancel = cancel.clone();
    let on_remove = move |row: &AssignmentRow| {
        if busy.get_untracked() {
            return;
        }
        let Some(request) = build_removal(row) else {
            log::warn!("assignment for {} has no id; cannot remove", row.faculty_name);
            return;
        };
        if !confirm_removal() || !begin_request(busy) {
            return;
        }
        let client = api.client();
        let reload_client = client.clone();
        let cancel = remove_cancel.clone();
        spawn_cancellable(
            &remove_cancel,
            async move { api::remove_assignment(&client, &request).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => reload_faculty(&cancel, reload_client, faculty),
                    Err(e) => {
                        log::error!("failed to remove assignment: {e}");
                        form_message.set(e.user_message());
                    }
                }
            },
        );
    };
    let on_remove = StoredValue::new(on_remove);

    let rows = move || faculty.with(|f| roles.with(|r| assignment_rows(f, r, &event_id.get())));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading event details..."</p> }>
            <div class="event-dashboard">
                <div class="event-dashboard__header">
                    <A href="/admin">"← Back to Dashboard"</A>
                    <h2>
                        "Event Dashboard: "
                        {move || event.get().map_or_else(|| event_id.get(), |e| e.event_name)}
                    </h2>
                </div>

                {move || {
                    event
                        .get()
                        .map(|e| {
                            let start = e.start_date.as_deref().map(date_only).unwrap_or_default().to_owned();
                            let end = e.end_date.as_deref().map(date_only).unwrap_or_default().to_owned();
                            view! {
                                <section class="event-dashboard__details">
                                    <h3>"Event Details"</h3>
                                    <p><strong>"Name: "</strong>{e.event_name}</p>
                                    <p><strong>"Description: "</strong>{e.event_description}</p>
                                    <p><strong>"Duration: "</strong>{start}" - "{end}</p>
                                </section>
                            }
                        })
                }}

                <section class="event-dashboard__assignments">
                    <div class="event-dashboard__assignments-header">
                        <h3>"Faculty Assignments"</h3>
                        <button class="btn" on:click=move |_| show_form.update(|open| *open = !*open)>
                            {move || if show_form.get() { "Cancel" } else { "Assign Role" }}
                        </button>
                    </div>

                    <Show when=move || show_form.get()>
                        <form class="assign-form" on:submit=move |ev| on_assign.with_value(|f| f(ev))>
                            <h4>"Assign Role to Faculty"</h4>
                            <label>"Faculty Member"</label>
                            <select
                                required
                                prop:value=move || form_faculty.get()
                                on:change=move |ev| form_faculty.set(event_target_value(&ev))
                            >
                                <option value="">"-- Select Faculty --"</option>
                                {move || {
                                    faculty
                                        .get()
                                        .into_iter()
                                        .map(|f| view! { <option value=f.id>{f.name}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <label>"Role"</label>
                            <select
                                required
                                prop:value=move || form_role.get()
                                on:change=move |ev| form_role.set(event_target_value(&ev))
                            >
                                <option value="">"-- Select Role --"</option>
                                {move || {
                                    roles
                                        .get()
                                        .into_iter()
                                        .map(|r| view! { <option value=r.id>{r.name}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <label>"Points"</label>
                            <input
                                type="number"
                                min="0"
                                required
                                prop:value=move || form_points.get()
                                on:input=move |ev| form_points.set(event_target_value(&ev))
                            />
                            <button class="btn" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Assign" }}
                            </button>
                            <Show when=move || !form_message.get().is_empty()>
                                <p class="assign-form__message">{move || form_message.get()}</p>
                            </Show>
                        </form>
                    </Show>

                    <table class="assignment-table">
                        <thead>
                            <tr>
                                <th>"Faculty"</th>
                                <th>"Role"</th>
                                <th>"Points"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !rows().is_empty()
                                fallback=|| {
                                    view! {
                                        <tr>
                                            <td colspan="4">"No faculty assignments for this event yet."</td>
                                        </tr>
                                    }
                                }
                            >
                                <For
                                    each=rows
                                    key=|row| row.key.clone()
                                    children=move |row: AssignmentRow| {
                                        let edit = row.clone();
                                        let remove = row.clone();
                                        view! {
                                            <tr>
                                                <td>{row.faculty_name}</td>
                                                <td>{row.role_label}</td>
                                                <td>{row.points}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--link btn--danger"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_remove.with_value(|f| f(&remove))
                                                    >
                                                        "Remove"
                                                    </button>
                                                    <button
                                                        class="btn btn--link"
                                                        on:click=move |_| {
                                                            form_faculty.set(edit.faculty_id.clone());
                                                            form_role.set(edit.role_id.clone());
                                                            form_points.set(edit.points.to_string());
                                                            show_form.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </section>
            </div>
        </Show>
    }
}
