use super::*;

fn admin(email: &str) -> User {
    User { email: email.to_owned(), role: Role::Admin }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_known_values() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("faculty".parse::<Role>(), Ok(Role::Faculty));
    assert_eq!("teacher".parse::<Role>(), Ok(Role::Faculty));
}

#[test]
fn role_rejects_case_variants_and_typos() {
    assert_eq!("Admin".parse::<Role>(), Err(UnknownRole("Admin".to_owned())));
    assert!("facutly".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"faculty\"");
    let role: Role = serde_json::from_str("\"teacher\"").unwrap();
    assert_eq!(role, Role::Faculty);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn new_store_has_no_session() {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    assert!(store.session().is_none());
}

#[test]
fn login_sets_and_persists_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(Arc::new(storage.clone()));
    store.login("t1".to_owned(), admin("a@x.edu"));

    let session = store.session().unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.role(), Role::Admin);

    let persisted: serde_json::Value = serde_json::from_str(&storage.raw().unwrap()).unwrap();
    assert_eq!(
        persisted,
        serde_json::json!({ "token": "t1", "user": { "email": "a@x.edu", "role": "admin" } })
    );
}

#[test]
fn login_overwrites_previous_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(Arc::new(storage.clone()));
    store.login("t1".to_owned(), admin("a@x.edu"));
    store.login("t2".to_owned(), User { email: "f@x.edu".to_owned(), role: Role::Faculty });

    assert_eq!(store.session().unwrap().token, "t2");
    assert_eq!(store.session().unwrap().role(), Role::Faculty);
    assert!(storage.raw().unwrap().contains("\"t2\""));
}

#[test]
fn login_accepts_any_token_format() {
    let mut store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store.login(String::new(), admin("a@x.edu"));
    assert_eq!(store.session().unwrap().token, "");
}

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(Arc::new(storage.clone()));
    store.login("t1".to_owned(), admin("a@x.edu"));
    store.logout();

    assert!(store.session().is_none());
    assert!(storage.raw().is_none());
}

#[test]
fn restart_rehydrates_persisted_session() {
    let storage = MemoryStorage::new();
    let user = admin("a@x.edu");
    {
        let mut store = SessionStore::new(Arc::new(storage.clone()));
        store.login("t".to_owned(), user.clone());
    }

    let restarted = SessionStore::restore(Arc::new(storage));
    assert_eq!(restarted.session(), Some(&Session { token: "t".to_owned(), user }));
}

#[test]
fn restore_after_logout_is_empty() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(Arc::new(storage.clone()));
    store.login("t".to_owned(), admin("a@x.edu"));
    store.logout();

    assert!(SessionStore::restore(Arc::new(storage)).session().is_none());
}

#[test]
fn restore_discards_unreadable_entry() {
    let storage = MemoryStorage::new();
    storage.write(r#"{"token":"t","user":{"email":"a@x.edu","role":"root"}}"#);

    let store = SessionStore::restore(Arc::new(storage.clone()));
    assert!(store.session().is_none());
    assert!(storage.raw().is_none());
}
