//! Routed pages.

pub mod add_faculty;
pub mod admin_dashboard;
pub mod event_dashboard;
pub mod event_history;
pub mod faculty_dashboard;
pub mod login;
pub mod signup;
pub mod unauthorized;
