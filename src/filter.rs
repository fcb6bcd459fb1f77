//! Filter Engine
//!
//! Case-insensitive substring search over name and position.

use crate::model::Employee;

/// Records whose name or position contains `query`, ignoring case
///
/// Recomputed from scratch on each call; source order is preserved and an
/// empty query returns every record.
pub fn filter(records: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|emp| matches(emp, &needle))
        .cloned()
        .collect()
}

fn matches(employee: &Employee, needle: &str) -> bool {
    employee.name.to_lowercase().contains(needle)
        || employee.position.to_lowercase().contains(needle)
}
