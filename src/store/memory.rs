//! In-memory slot store
//!
//! Volatile store for tests and embedding; counts writes so callers can
//! observe persistence calls.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::Result;

use super::SlotStore;

/// Slot store held entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    slots: RwLock<BTreeMap<String, String>>,
    writes: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.write().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set`/`remove` calls observed
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl SlotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.slots.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.slots.write().remove(key);
        Ok(())
    }
}
