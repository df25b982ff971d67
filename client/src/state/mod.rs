//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain data model and its persistence; `auth` wraps it
//! in reactive signals for the view tree.

pub mod auth;
pub mod session;
