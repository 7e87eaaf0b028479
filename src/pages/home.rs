//! Public landing page.

use leptos::prelude::*;

use crate::config::{ACCOUNT_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use crate::state::auth::use_auth;
use crate::util::nav::display_name;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_auth().state();

    view! {
        <div class="home-page">
            <h1>"Chung Tay Phong Ngua"</h1>
            <p class="home-page__lead">"Community support for prevention and recovery."</p>
            {move || {
                let current = state.get();
                if current.loading {
                    ().into_any()
                } else if current.is_authenticated() {
                    view! {
                        <p>
                            "Welcome back, " {display_name(&current)} ". "
                            <a href=ACCOUNT_ROUTE>"View your account"</a>
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <p class="home-page__cta">
                            <a href=LOGIN_ROUTE class="btn">"Sign in"</a>
                            <a href=REGISTER_ROUTE class="btn btn--primary">"Create an account"</a>
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
