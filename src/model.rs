//! Roster data model
//!
//! The employee record and the slot keys it is persisted under.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository (>= 1)
pub type EmployeeId = u64;

/// A single roster entry
///
/// Serialized as `{"id":1,"name":"..","position":"..","salary":50000.0}`
/// inside the `employees` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }
}
