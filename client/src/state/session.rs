//! Session model and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `SessionStore` is the single source of truth for "who is signed in".
//! It mirrors every write into a `SessionStorage` backend so a page reload
//! can rebuild the same session. Browser builds persist to `localStorage`;
//! tests use `MemoryStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Fixed `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "arena_console_auth";

/// Closed set of console roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Accepts the backend's older `"teacher"` spelling.
    #[serde(alias = "teacher")]
    Faculty,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known roles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Self::Admin),
            "faculty" | "teacher" => Ok(Self::Faculty),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: Role,
}

/// Proof of authentication plus the role it grants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Durable key/value slot for the serialized session.
pub trait SessionStorage: Send + Sync {
    fn read(&self) -> Option<String>;
    fn write(&self, raw: &str);
    fn remove(&self);
}

/// `localStorage`-backed storage. No-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl SessionStorage for LocalStorage {
    fn read(&self) -> Option<String> {
        crate::util::storage::load_raw(SESSION_STORAGE_KEY)
    }

    fn write(&self, raw: &str) {
        crate::util::storage::save_raw(SESSION_STORAGE_KEY, raw);
    }

    fn remove(&self) {
        crate::util::storage::remove(SESSION_STORAGE_KEY);
    }
}

/// In-process storage. Clones share the same slot, which lets tests model
/// an application restart over the same persisted data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw persisted value, for inspection.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.read()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn write(&self, raw: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Owns the current session and keeps the persisted copy in sync.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Option<Session>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.session).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Empty store over `storage`. Does not read the persisted entry.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, session: None }
    }

    /// Store rebuilt from whatever `storage` holds.
    ///
    /// An entry that no longer deserializes is dropped from storage.
    #[must_use]
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let session = storage.read().and_then(|raw| match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable persisted session: {e}");
                storage.remove();
                None
            }
        });
        Self { storage, session }
    }

    /// Replace the current session, persisting it.
    pub fn login(&mut self, token: String, user: User) {
        let session = Session { token, user };
        match serde_json::to_string(&session) {
            Ok(raw) => self.storage.write(&raw),
            Err(e) => log::error!("failed to serialize session: {e}"),
        }
        self.session = Some(session);
    }

    /// Re-read the persisted entry, replacing the in-memory session.
    pub fn reload(&mut self) {
        *self = Self::restore(Arc::clone(&self.storage));
    }

    /// Clear the current session and its persisted copy.
    pub fn logout(&mut self) {
        self.session = None;
        self.storage.remove();
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
