//! Route wrappers that only render their children for qualifying viewers.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::{Access, GuardOutcome, evaluate, install_guard_redirect};

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth().state();
    install_guard_redirect(auth, access, use_navigate());

    move || match evaluate(access, &auth.get()) {
        GuardOutcome::Pending => view! { <div class="route-guard__loading">"Loading..."</div> }.into_any(),
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(_) => ().into_any(),
    }
}

/// Renders children for any signed-in user; anonymous visitors go to login.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Authenticated, children)
}

/// Renders children for administrators only.
///
/// Anonymous visitors go to login; signed-in non-admins go home.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Admin, children)
}
