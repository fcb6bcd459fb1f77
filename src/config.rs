//! Configuration for rosterdesk
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a rosterdesk instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the slot file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── slots.db         (employees + isLoggedIn slots)
    pub data_dir: PathBuf,

    /// Sync strategy: whether to fsync each slot file rewrite
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Export Configuration
    // -------------------------------------------------------------------------
    /// Directory the CSV download is saved into
    pub export_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Interaction Configuration
    // -------------------------------------------------------------------------
    /// Ask before deleting a record
    pub confirm_deletes: bool,
}

/// Slot file sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every rewrite (safest, slowest)
    EveryWrite,

    /// Leave flushing to the OS page cache
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./rosterdesk_data"),
            sync_strategy: SyncStrategy::EveryWrite,
            export_dir: PathBuf::from("."),
            confirm_deletes: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations that cannot be opened
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(RosterError::Config("data_dir cannot be empty".to_string()));
        }
        if self.export_dir.as_os_str().is_empty() {
            return Err(RosterError::Config("export_dir cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for the slot file)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the slot file sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the directory CSV exports are written to
    pub fn export_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.export_dir = path.into();
        self
    }

    /// Enable or disable the delete confirmation prompt
    pub fn confirm_deletes(mut self, confirm: bool) -> Self {
        self.config.confirm_deletes = confirm;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
