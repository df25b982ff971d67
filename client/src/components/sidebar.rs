//! Admin navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

/// Label and target of each sidebar entry, in display order.
pub const MENU_ITEMS: [(&str, &str); 3] =
    [("Home", "/admin"), ("Past Events", "/admin/event-history"), ("Users", "/admin/add-teacher")];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <aside class="sidebar">
            <h1 class="sidebar__title">"Dashboard"</h1>
            <nav class="sidebar__nav">
                {MENU_ITEMS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <A href=path attr:class="sidebar__item">
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="sidebar__user">{move || auth.session().map(|s| s.user.email).unwrap_or_default()}</span>
            // The enclosing guard redirects to /login once the session is gone.
            <button class="btn sidebar__logout" on:click=move |_| auth.logout()>
                "Log out"
            </button>
        </aside>
    }
}
