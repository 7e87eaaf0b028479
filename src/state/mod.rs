//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns durable storage of the signed-in session; `auth` owns the
//! in-memory state derived from it and is the only writer of `session`.

pub mod auth;
pub mod session;
