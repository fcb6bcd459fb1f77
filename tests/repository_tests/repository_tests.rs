//! Tests for Repository
//!
//! These tests verify:
//! - Id assignment (max + 1, reuse after deleting the highest id)
//! - In-place updates that keep ordering
//! - First-match deletes and repeat deletes
//! - Change events for every mutation

use rosterdesk::repository::{ChangeEvent, Repository};
use rosterdesk::Employee;

// =============================================================================
// Helper Functions
// =============================================================================

fn repo_with(names: &[&str]) -> Repository {
    let mut repo = Repository::default();
    for name in names {
        repo.create(*name, "Engineer", 50_000.0);
    }
    repo
}

fn ids(repo: &Repository) -> Vec<u64> {
    repo.list().iter().map(|emp| emp.id).collect()
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_assigns_sequential_ids_from_empty() {
    let repo = repo_with(&["A", "B", "C", "D"]);

    assert_eq!(ids(&repo), vec![1, 2, 3, 4]);
}

#[test]
fn test_create_returns_appended_record() {
    let mut repo = Repository::default();

    let emp = repo.create("Ada", "Analyst", 72_500.5);

    assert_eq!(emp, Employee::new(1, "Ada", "Analyst", 72_500.5));
    assert_eq!(repo.list().last(), Some(&emp));
}

#[test]
fn test_create_reissues_id_after_deleting_highest() {
    let mut repo = Repository::default();
    let a = repo.create("A", "X", 1.0);
    let b = repo.create("B", "X", 1.0);
    assert_eq!((a.id, b.id), (1, 2));

    assert!(repo.delete(b.id));
    let c = repo.create("C", "X", 1.0);

    assert_eq!(c.id, 2);
}

#[test]
fn test_create_uses_max_not_count() {
    let mut repo = Repository::new(vec![
        Employee::new(7, "Late", "X", 1.0),
        Employee::new(3, "Early", "X", 1.0),
    ]);

    let emp = repo.create("New", "X", 1.0);

    assert_eq!(emp.id, 8);
    assert_eq!(ids(&repo), vec![7, 3, 8]);
}

#[test]
fn test_create_after_deleting_lower_id_does_not_fill_gap() {
    let mut repo = repo_with(&["A", "B", "C"]);

    repo.delete(1);
    let emp = repo.create("D", "X", 1.0);

    assert_eq!(emp.id, 4);
}

// =============================================================================
// Find Tests
// =============================================================================

#[test]
fn test_find_by_id() {
    let repo = repo_with(&["A", "B"]);

    assert_eq!(repo.find_by_id(2).map(|e| e.name.as_str()), Some("B"));
    assert!(repo.find_by_id(99).is_none());
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_preserves_position_and_other_records() {
    let mut repo = repo_with(&["A", "B", "C"]);
    let before = repo.list().to_vec();

    assert!(repo.update(2, "Bea", "Lead", 90_000.0));

    let after = repo.list();
    assert_eq!(ids(&repo), vec![1, 2, 3]);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1], Employee::new(2, "Bea", "Lead", 90_000.0));
}

#[test]
fn test_update_missing_id_is_noop() {
    let mut repo = repo_with(&["A", "B"]);
    let before = repo.list().to_vec();

    assert!(!repo.update(42, "Ghost", "None", 0.0));

    assert_eq!(repo.list(), before.as_slice());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_exactly_one() {
    let mut repo = repo_with(&["A", "B", "C"]);

    assert!(repo.delete(2));

    assert_eq!(ids(&repo), vec![1, 3]);
}

#[test]
fn test_delete_twice_returns_false() {
    let mut repo = repo_with(&["A", "B"]);

    assert!(repo.delete(1));
    assert!(!repo.delete(1));
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_delete_removes_first_match_only() {
    let mut repo = Repository::new(vec![
        Employee::new(5, "First", "X", 1.0),
        Employee::new(5, "Second", "X", 1.0),
    ]);

    assert!(repo.delete(5));

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list()[0].name, "Second");
}

#[test]
fn test_delete_on_empty_repo() {
    let mut repo = Repository::default();

    assert!(!repo.delete(1));
    assert!(repo.is_empty());
    assert_eq!(repo.next_id(), 1);
}

// =============================================================================
// Change Event Tests
// =============================================================================

#[test]
fn test_mutations_emit_events() {
    let mut repo = Repository::default();
    let rx = repo.subscribe();

    let emp = repo.create("A", "X", 1.0);
    repo.update(1, "A2", "X", 2.0);
    repo.update(9, "Nope", "X", 2.0);
    repo.delete(1);
    repo.delete(1);

    let events: Vec<ChangeEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            ChangeEvent::Created(emp),
            ChangeEvent::Updated { id: 1, applied: true },
            ChangeEvent::Updated { id: 9, applied: false },
            ChangeEvent::Deleted { id: 1, removed: true },
            ChangeEvent::Deleted { id: 1, removed: false },
        ]
    );
}

#[test]
fn test_reads_emit_nothing() {
    let mut repo = repo_with(&["A"]);
    let rx = repo.subscribe();

    let _ = repo.list();
    let _ = repo.find_by_id(1);

    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn test_dropped_subscriber_does_not_block_mutations() {
    let mut repo = Repository::default();
    let rx = repo.subscribe();
    drop(rx);

    let emp = repo.create("A", "X", 1.0);

    assert_eq!(emp.id, 1);
}
