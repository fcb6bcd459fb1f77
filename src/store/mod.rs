//! Store Module
//!
//! Durable key-value storage of string slots.
//!
//! ## Responsibilities
//! - Get/set/remove named string slots
//! - Survive process restarts (`FileStore`)
//! - Detect torn or corrupted slot files
//! - Map the employee collection onto the `employees` slot
//!
//! ## Slot File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header (10 bytes)                                        │
//! │   Magic: "RSDK" (4) | Version: u16 (2) | PayloadLen (4)  │
//! ├──────────────────────────────────────────────────────────┤
//! │ Payload (variable)                                       │
//! │   bincode(BTreeMap<String, String>)                      │
//! ├──────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                         │
//! │   PayloadCRC: u32                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod employees;
mod file_store;
mod memory;
mod slot_file;

pub use employees::EmployeeStore;
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use slot_file::{decode_slots, encode_slots, FOOTER_SIZE, HEADER_SIZE};

use crate::error::Result;

/// Slot holding the JSON-encoded employee collection
pub const EMPLOYEES_SLOT: &str = "employees";

/// Slot holding `"true"` while a session is active
pub const LOGGED_IN_SLOT: &str = "isLoggedIn";

/// String-valued durable key-value storage
///
/// All methods take `&self`; implementations use interior mutability so one
/// handle can be shared by the session gate and the employee adapter.
pub trait SlotStore {
    /// Read a slot, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, fully overwriting any prior value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot (no-op when absent)
    fn remove(&self, key: &str) -> Result<()>;
}
