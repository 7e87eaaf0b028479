//! Administrator landing page. Mounted behind `AdminRoute`.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::nav::display_name;

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = use_auth().state();

    view! {
        <div class="admin-page">
            <h1>"Admin dashboard"</h1>
            <p>"Signed in as " {move || display_name(&state.get())}</p>
        </div>
    }
}
