//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::role_guard::RoleGuard;
use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::pages::{
    add_faculty::AddFacultyPage, admin_dashboard::AdminDashboardPage, event_dashboard::EventDashboardPage,
    event_history::EventHistoryPage, faculty_dashboard::FacultyDashboardPage, login::LoginPage, signup::SignupPage,
    unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthContext;
use crate::state::session::{LocalStorage, Role};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_config` is published as a meta tag for the browser build and as
/// context for the server render.
pub fn shell(options: LeptosOptions, api_config: ApiConfig) -> impl IntoView {
    let api_base = api_config.base_url().to_owned();
    provide_context(api_config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides `ApiConfig` and the process-wide `AuthContext`, restores any
/// persisted session once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api_config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api_config);

    let auth = AuthContext::provide(Arc::new(LocalStorage));
    // Effects only run in the browser, after hydration.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/arena-console.css"/>
        <Title text="Arena Console"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=SignupPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/login") view=LoginPage/>
                <ParentRoute path=path!("/admin") view=AdminArea>
                    <Route path=path!("") view=AdminDashboardPage/>
                    <Route path=path!("/add-teacher") view=AddFacultyPage/>
                    <Route path=path!("/event-history") view=EventHistoryPage/>
                    <Route path=path!("/event/:event_id") view=EventDashboardPage/>
                </ParentRoute>
                <Route path=path!("/faculty") view=FacultyArea/>
                <Route path=path!("/unauthorized") view=UnauthorizedPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RoleGuard allowed_roles=vec![Role::Admin]>
            <DashboardLayout/>
        </RoleGuard>
    }
}

#[component]
fn FacultyArea() -> impl IntoView {
    view! {
        <RoleGuard allowed_roles=vec![Role::Faculty]>
            <FacultyDashboardPage/>
        </RoleGuard>
    }
}
