//! Tests for the filter engine

use rosterdesk::filter::filter;
use rosterdesk::Employee;

fn roster() -> Vec<Employee> {
    vec![
        Employee::new(1, "Alice Smith", "Engineer", 90_000.0),
        Employee::new(2, "Bob Jones", "Sales Manager", 60_000.0),
        Employee::new(3, "Carol", "Senior ENGINEER", 120_000.0),
        Employee::new(4, "Dave Engel", "Support", 45_000.0),
    ]
}

fn ids(records: &[Employee]) -> Vec<u64> {
    records.iter().map(|emp| emp.id).collect()
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let records = roster();

    assert_eq!(filter(&records, ""), records);
}

#[test]
fn test_matches_position_case_insensitively() {
    let records = roster();

    assert_eq!(ids(&filter(&records, "engineer")), vec![1, 3]);
    assert_eq!(ids(&filter(&records, "EnGiNeEr")), vec![1, 3]);
}

#[test]
fn test_matches_name_or_position_substring() {
    let records = roster();

    // "eng" hits Engineer (1, 3) and Engel (4)
    assert_eq!(ids(&filter(&records, "eng")), vec![1, 3, 4]);
    assert_eq!(ids(&filter(&records, "jones")), vec![2]);
}

#[test]
fn test_no_matches() {
    let records = roster();

    assert!(filter(&records, "zzz").is_empty());
}

#[test]
fn test_filter_on_empty_collection() {
    assert!(filter(&[], "anything").is_empty());
    assert!(filter(&[], "").is_empty());
}

#[test]
fn test_whitespace_is_part_of_query() {
    let records = roster();

    assert_eq!(ids(&filter(&records, "sales m")), vec![2]);
    assert!(filter(&records, " carol").is_empty());
}
