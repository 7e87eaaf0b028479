//! Profile of the signed-in user. Mounted behind `ProtectedRoute`.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn AccountPage() -> impl IntoView {
    let state = use_auth().state();

    let field = move |f: fn(&crate::net::types::User) -> String| {
        move || state.get().user().map_or_else(|| "—".to_owned(), f)
    };

    view! {
        <div class="account-page">
            <h1>"My account"</h1>
            <dl class="account-page__fields">
                <dt>"Name"</dt>
                <dd>{field(|u| u.full_name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"Phone"</dt>
                <dd>{field(|u| u.phone.clone().unwrap_or_default())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|u| u.role.to_string())}</dd>
                <dt>"Email verified"</dt>
                <dd>{field(|u| if u.verified { "Yes".to_owned() } else { "No".to_owned() })}</dd>
            </dl>
        </div>
    }
}
