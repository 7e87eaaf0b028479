//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth context provided at the app root; route guards
//! wrap page views, the header renders role-aware navigation.

pub mod header;
pub mod route_guard;
