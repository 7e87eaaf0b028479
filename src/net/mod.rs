//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` decorates and sends requests, `types` defines the shared wire schema.

pub mod api;
pub mod types;
