//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    header::Header,
    route_guard::{AdminRoute, ProtectedRoute},
};
use crate::config::{ACCOUNT_ROUTE, ADMIN_ROUTE, HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use crate::pages::{
    account::AccountPage, admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::auth::provide_auth_context;
use crate::state::session::SessionStore;

fn segment(route: &'static str) -> StaticSegment<&'static str> {
    StaticSegment(route.trim_start_matches('/'))
}

/// Root application component.
///
/// Provides the auth context (restoring any tab session) and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_context(SessionStore::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/ctpn-client.css"/>
        <Title text="Chung Tay Phong Ngua"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=segment(HOME_ROUTE) view=HomePage/>
                    <Route path=segment(LOGIN_ROUTE) view=LoginPage/>
                    <Route path=segment(REGISTER_ROUTE) view=RegisterPage/>
                    <Route
                        path=segment(ACCOUNT_ROUTE)
                        view=|| view! { <ProtectedRoute><AccountPage/></ProtectedRoute> }
                    />
                    <Route
                        path=segment(ADMIN_ROUTE)
                        view=|| view! { <AdminRoute><AdminPage/></AdminRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
