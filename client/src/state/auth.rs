//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and provided to the whole view tree. Route guards
//! and user-aware components read the session through it, and the login
//! page and logout actions write through it. Every read is tracked, so a
//! login or logout re-runs any view that looked at the session.
//!
//! LIFECYCLE
//! =========
//! The context starts unrestored: server rendering has no access to browser
//! storage. Once mounted in the browser, `restore` reads the persisted entry
//! and flips `is_restored`, after which guards make real decisions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{Session, SessionStorage, SessionStore, User};

/// Shared handle over the session store. Cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    store: RwSignal<SessionStore>,
    restored: RwSignal<bool>,
}

impl AuthContext {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { store: RwSignal::new(SessionStore::new(storage)), restored: RwSignal::new(false) }
    }

    /// Build a context and provide it to descendants of the current owner.
    pub fn provide(storage: Arc<dyn SessionStorage>) -> Self {
        let auth = Self::new(storage);
        provide_context(auth);
        auth
    }

    /// Load any persisted session and mark the context as restored.
    pub fn restore(&self) {
        self.store.update(SessionStore::reload);
        self.restored.set(true);
    }

    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    /// Current session, tracked.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.store.with(|store| store.session().cloned())
    }

    /// Current session without subscribing the caller.
    #[must_use]
    pub fn session_untracked(&self) -> Option<Session> {
        self.store.with_untracked(|store| store.session().cloned())
    }

    pub fn login(&self, token: String, user: User) {
        log::info!("signed in as {} ({})", user.email, user.role);
        self.store.update(|store| store.login(token, user));
    }

    pub fn logout(&self) {
        log::info!("signed out");
        self.store.update(SessionStore::logout);
    }
}

/// Fetch the `AuthContext` provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
