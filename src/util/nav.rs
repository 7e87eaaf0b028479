//! Header navigation entries and their visibility rules.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::{ACCOUNT_ROUTE, ADMIN_ROUTE, HOME_ROUTE};
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Public,
    Member,
    AdminOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub audience: Audience,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: HOME_ROUTE, label: "Home", audience: Audience::Public },
    NavItem { path: ACCOUNT_ROUTE, label: "My account", audience: Audience::Member },
    NavItem { path: ADMIN_ROUTE, label: "Admin dashboard", audience: Audience::AdminOnly },
];

impl NavItem {
    pub fn visible_to(&self, state: &AuthState) -> bool {
        match self.audience {
            Audience::Public => true,
            Audience::Member => state.is_authenticated(),
            Audience::AdminOnly => state.is_admin(),
        }
    }
}

pub fn visible_nav_items(state: &AuthState) -> Vec<NavItem> {
    NAV_ITEMS.iter().copied().filter(|item| item.visible_to(state)).collect()
}

/// Name shown next to the logout button.
pub fn display_name(state: &AuthState) -> String {
    state
        .user()
        .map(|u| u.full_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("User")
        .to_owned()
}
