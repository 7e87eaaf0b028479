//! Site header with role-aware navigation and the sign-in/sign-out controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use crate::state::auth::use_auth;
use crate::util::nav::{display_name, visible_nav_items};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        auth.logout();
        navigate(HOME_ROUTE, NavigateOptions::default());
    });

    view! {
        <header class="site-header">
            <a href=HOME_ROUTE class="site-header__brand">
                <span class="site-header__logo">"CT"</span>
                "Chung Tay Phong Ngua"
            </a>
            <nav class="site-header__nav">
                {move || {
                    visible_nav_items(&state.get())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a href=item.path class="site-header__link">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="site-header__actions">
                {move || {
                    if state.get().is_authenticated() {
                        view! {
                            <span class="site-header__user">{move || display_name(&state.get())}</span>
                            <button class="btn" title="Sign out" on:click=move |_| on_logout.run(())>
                                "Sign out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a href=LOGIN_ROUTE class="btn">"Sign in"</a>
                            <a href=REGISTER_ROUTE class="btn btn--primary">"Register"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
