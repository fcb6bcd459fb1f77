//! Employee collection adapter
//!
//! Loads and saves the whole roster as one JSON blob in the `employees` slot.

use std::sync::Arc;

use crate::error::{Result, RosterError};
use crate::model::Employee;

use super::{SlotStore, EMPLOYEES_SLOT};

/// Maps the employee collection onto a slot store
pub struct EmployeeStore<S> {
    store: Arc<S>,
}

impl<S: SlotStore> EmployeeStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Read the full collection
    ///
    /// An absent slot is an empty roster. Unparseable content is returned as
    /// `MalformedStoredData` without any attempt at recovery.
    pub fn load_all(&self) -> Result<Vec<Employee>> {
        let Some(text) = self.store.get(EMPLOYEES_SLOT)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&text).map_err(|source| RosterError::MalformedStoredData {
            slot: EMPLOYEES_SLOT,
            source,
        })
    }

    /// Overwrite the slot with the full collection
    pub fn save_all(&self, records: &[Employee]) -> Result<()> {
        let text = serde_json::to_string(records)
            .map_err(|e| RosterError::Serialization(e.to_string()))?;
        self.store.set(EMPLOYEES_SLOT, &text)?;
        tracing::debug!(records = records.len(), "Saved employee collection");
        Ok(())
    }
}
