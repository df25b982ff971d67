//! Networking modules for the console backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends REST calls (login exchange included) and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
