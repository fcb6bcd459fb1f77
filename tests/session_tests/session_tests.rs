//! Tests for SessionGate

use std::sync::Arc;

use rosterdesk::config::SyncStrategy;
use rosterdesk::session::{LoginOutcome, SessionGate, SessionState};
use rosterdesk::store::{FileStore, MemoryStore, SlotStore, LOGGED_IN_SLOT};
use tempfile::TempDir;

#[test]
fn test_starts_unauthenticated() {
    let gate = SessionGate::new(Arc::new(MemoryStore::new()));

    assert_eq!(gate.state().unwrap(), SessionState::Unauthenticated);
}

#[test]
fn test_login_with_correct_credentials() {
    let slots = Arc::new(MemoryStore::new());
    let gate = SessionGate::new(Arc::clone(&slots));

    assert_eq!(gate.login("admin", "1234").unwrap(), LoginOutcome::Accepted);

    assert!(gate.is_authenticated().unwrap());
    assert_eq!(slots.get(LOGGED_IN_SLOT).unwrap().as_deref(), Some("true"));
}

#[test]
fn test_login_is_case_sensitive_and_exact() {
    let slots = Arc::new(MemoryStore::new());
    let gate = SessionGate::new(Arc::clone(&slots));

    for (user, pass) in [("Admin", "1234"), ("admin", "12345"), ("admin ", "1234"), ("", "")] {
        assert_eq!(gate.login(user, pass).unwrap(), LoginOutcome::Rejected);
    }

    assert_eq!(gate.state().unwrap(), SessionState::Unauthenticated);
    assert_eq!(slots.write_count(), 0);
}

#[test]
fn test_logout_clears_flag() {
    let slots = Arc::new(MemoryStore::new());
    let gate = SessionGate::new(Arc::clone(&slots));
    gate.login("admin", "1234").unwrap();

    gate.logout().unwrap();

    assert_eq!(gate.state().unwrap(), SessionState::Unauthenticated);
    assert_eq!(slots.get(LOGGED_IN_SLOT).unwrap(), None);
}

#[test]
fn test_only_literal_true_counts() {
    let gate = SessionGate::new(Arc::new(MemoryStore::with_slot(LOGGED_IN_SLOT, "TRUE")));

    assert_eq!(gate.state().unwrap(), SessionState::Unauthenticated);
}

#[test]
fn test_flag_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let slots = Arc::new(FileStore::open(temp_dir.path(), SyncStrategy::EveryWrite).unwrap());
        SessionGate::new(slots).login("admin", "1234").unwrap();
    }

    let slots = Arc::new(FileStore::open(temp_dir.path(), SyncStrategy::EveryWrite).unwrap());
    assert!(SessionGate::new(slots).is_authenticated().unwrap());
}
