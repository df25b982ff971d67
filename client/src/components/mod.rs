//! Reusable view components.

pub mod dashboard_layout;
pub mod event_list;
pub mod role_guard;
pub mod sidebar;
