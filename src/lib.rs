//! # rosterdesk
//!
//! An employee roster manager with:
//! - A login gate persisted in durable storage
//! - Create/edit/delete on an in-memory, insertion-ordered collection
//! - Live case-insensitive search
//! - CSV export
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Host (CLI / any UI)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ user actions        ▲ Screen
//! ┌─────────────────────▼─────────────────────┴─────────────────┐
//! │                     App controller                          │
//! │        (SessionGate · form state · filter · render)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐  ChangeEvent ┌──────────────┐
//!   │ Repository  │ ───────────▶ │EmployeeStore │
//!   │ (Vec, ids)  │              │   (JSON)     │
//!   └─────────────┘              └──────┬───────┘
//!                                       ▼
//!                               ┌──────────────┐
//!                               │  SlotStore   │
//!                               │ (slots.db)   │
//!                               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod repository;
pub mod filter;
pub mod export;
pub mod session;
pub mod view;
pub mod app;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RosterError, Result};
pub use config::Config;
pub use model::{Employee, EmployeeId};
pub use app::App;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rosterdesk
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
