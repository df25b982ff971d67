//! View wrapper that applies the route guard to its children.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::use_auth;
use crate::state::session::Role;
use crate::util::auth::{GuardDecision, decide};

/// Render `children` only for a session whose role is in `allowed_roles`.
///
/// Omitting `allowed_roles` admits any signed-in role. The decision is
/// re-evaluated whenever the session changes, so a logout on a guarded view
/// redirects immediately. Until the persisted session has been restored the
/// guard shows a placeholder instead of deciding.
#[component]
pub fn RoleGuard(#[prop(optional)] allowed_roles: Option<Vec<Role>>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let allowed_roles = StoredValue::new(allowed_roles);

    move || {
        if !auth.is_restored() {
            return view! { <p class="guard-pending">"Loading..."</p> }.into_any();
        }
        let session = auth.session();
        match allowed_roles.with_value(|roles| decide(session.as_ref(), roles.as_deref())) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Deny(denied) => {
                log::debug!("guard redirect: {denied}");
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=denied.redirect_path() options/> }.into_any()
            }
        }
    }
}
