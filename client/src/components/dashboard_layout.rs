//! Admin area chrome: sidebar plus the nested route outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <main class="layout__main">
                <Outlet/>
            </main>
        </div>
    }
}
