//! Shared route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected and admin routes apply identical redirect rules: wait while the
//! session is restoring, send anonymous visitors to login, send signed-in
//! visitors who lack the role home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::state::auth::AuthState;

/// What a guarded route requires of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restoration still running; show a placeholder.
    Pending,
    Render,
    Redirect(&'static str),
}

pub fn evaluate(access: Access, state: &AuthState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    if !state.is_authenticated() {
        return GuardOutcome::Redirect(LOGIN_ROUTE);
    }
    match access {
        Access::Authenticated => GuardOutcome::Render,
        Access::Admin if state.is_admin() => GuardOutcome::Render,
        Access::Admin => GuardOutcome::Redirect(HOME_ROUTE),
    }
}

/// Navigate away whenever `access` is no longer satisfied.
///
/// Runs as an effect so redirects never fire from inside a render pass.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(route) = evaluate(access, &auth.get()) {
            log::debug!("guard: {access:?} unmet, redirecting to {route}");
            navigate(route, NavigateOptions::default());
        }
    });
}
