//! Repository Module
//!
//! In-memory ordered employee collection.
//!
//! ## Responsibilities
//! - Keep records in insertion order (never re-sorted)
//! - Assign ids as `max(existing) + 1`
//! - Update/delete by id without touching other records
//! - Announce every mutation on a change channel
//!
//! The repository never persists or renders; subscribers react to
//! `ChangeEvent`s instead.

use crossbeam::channel::{self, Receiver, Sender};

use crate::model::{Employee, EmployeeId};

/// Mutation notice emitted after every create/update/delete call
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// A record was appended
    Created(Employee),

    /// An update was attempted; `applied` is false when the id was absent
    Updated { id: EmployeeId, applied: bool },

    /// A delete was attempted; `removed` is false when the id was absent
    Deleted { id: EmployeeId, removed: bool },
}

/// Ordered collection of employee records
#[derive(Default)]
pub struct Repository {
    /// Records in insertion order
    records: Vec<Employee>,

    /// Live subscribers; dropped receivers are pruned on send
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl Repository {
    /// Create a repository over records loaded from storage
    pub fn new(records: Vec<Employee>) -> Self {
        Self {
            records,
            subscribers: Vec::new(),
        }
    }

    /// Register for change events
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// All records, insertion order
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id
    pub fn find_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|emp| emp.id == id)
    }

    /// The id the next `create` will assign
    ///
    /// Derived from current content, so deleting the highest id frees it
    /// for reuse.
    pub fn next_id(&self) -> EmployeeId {
        self.records.iter().map(|emp| emp.id).max().map_or(1, |max| max + 1)
    }

    /// Append a new record with a fresh id
    pub fn create(
        &mut self,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> Employee {
        let employee = Employee::new(self.next_id(), name, position, salary);
        self.records.push(employee.clone());

        tracing::debug!(id = employee.id, "Created employee");
        self.emit(ChangeEvent::Created(employee.clone()));
        employee
    }

    /// Replace the fields of an existing record in place
    ///
    /// Returns false, leaving the collection untouched, when `id` is absent.
    pub fn update(
        &mut self,
        id: EmployeeId,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> bool {
        let applied = match self.records.iter_mut().find(|emp| emp.id == id) {
            Some(emp) => {
                emp.name = name.into();
                emp.position = position.into();
                emp.salary = salary;
                true
            }
            None => false,
        };

        tracing::debug!(id, applied, "Updated employee");
        self.emit(ChangeEvent::Updated { id, applied });
        applied
    }

    /// Remove the first record with the given id
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let removed = match self.records.iter().position(|emp| emp.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        };

        tracing::debug!(id, removed, "Deleted employee");
        self.emit(ChangeEvent::Deleted { id, removed });
        removed
    }

    fn emit(&mut self, event: ChangeEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
