//! Landing view for signed-in users outside a route's allow-list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::LOGIN_PATH;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h2>"Unauthorized Access"</h2>
            <A href=LOGIN_PATH>"Back to login"</A>
        </div>
    }
}
