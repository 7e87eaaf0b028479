//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; access control is applied by
//! wrapping pages in the route guards from `components::route_guard`.

pub mod account;
pub mod admin;
pub mod home;
pub mod login;
pub mod register;
