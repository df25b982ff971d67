//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RoleGuard` applies `decide` on every render of a guarded location, so
//! the decision stays a pure function of the current session and the
//! route's allow-list.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const ADMIN_HOME_PATH: &str = "/admin";
pub const FACULTY_HOME_PATH: &str = "/faculty";

/// Why a guarded view refused to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("not signed in")]
    Unauthenticated,
    #[error("role not permitted here")]
    Unauthorized,
}

impl AccessDenied {
    /// Where the guard sends the user instead.
    #[must_use]
    pub fn redirect_path(self) -> &'static str {
        match self {
            Self::Unauthenticated => LOGIN_PATH,
            Self::Unauthorized => UNAUTHORIZED_PATH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Deny(AccessDenied),
}

/// Decide whether a guarded view may render.
///
/// An absent or empty `allowed_roles` admits any signed-in role.
#[must_use]
pub fn decide(session: Option<&Session>, allowed_roles: Option<&[Role]>) -> GuardDecision {
    let Some(session) = session else {
        return GuardDecision::Deny(AccessDenied::Unauthenticated);
    };
    match allowed_roles {
        Some(roles) if !roles.is_empty() && !roles.contains(&session.role()) => {
            GuardDecision::Deny(AccessDenied::Unauthorized)
        }
        _ => GuardDecision::Render,
    }
}

/// Landing view for a freshly signed-in role.
#[must_use]
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME_PATH,
        Role::Faculty => FACULTY_HOME_PATH,
    }
}
