//! File Store
//!
//! Slot store persisted to a single checksummed file.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::config::SyncStrategy;
use crate::error::Result;

use super::slot_file::{decode_slots, encode_slots};
use super::SlotStore;

/// Durable slot store backed by `{data_dir}/slots.db`
///
/// ## Durability:
/// - Every `set`/`remove` rewrites the whole image to a temp file and renames
///   it over the live file, so a crash leaves either the old or new image.
/// - `slots` mirrors what is on disk; a failed rewrite rolls the cache back.
pub struct FileStore {
    /// Path of the live slot file
    path: PathBuf,

    /// Whether rewrites are fsynced before rename
    sync_strategy: SyncStrategy,

    /// In-memory mirror of the slot file
    slots: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    const SLOT_FILENAME: &'static str = "slots.db";
    const TEMP_FILENAME: &'static str = "slots.db.tmp";

    /// Open or create the store in `data_dir`
    ///
    /// A missing slot file is an empty store; a corrupted one is an error.
    pub fn open(data_dir: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(Self::SLOT_FILENAME);

        let slots = if path.exists() {
            let mut bytes = Vec::new();
            File::open(&path)?.read_to_end(&mut bytes)?;
            let slots = decode_slots(&bytes)?;
            tracing::debug!(path = %path.display(), slots = slots.len(), "Loaded slot file");
            slots
        } else {
            tracing::debug!(path = %path.display(), "No slot file, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            sync_strategy,
            slots: RwLock::new(slots),
        })
    }

    /// Path of the live slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of slots currently stored
    pub fn slot_count(&self) -> usize {
        self.slots.read().len()
    }

    fn rewrite(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        let image = encode_slots(slots)?;
        let temp_path = self.path.with_file_name(Self::TEMP_FILENAME);

        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&temp_path)?;
            file.write_all(&image)?;
            if self.sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
        }

        fs::rename(&temp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), bytes = image.len(), "Rewrote slot file");
        Ok(())
    }
}

impl SlotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write();
        let previous = slots.insert(key.to_string(), value.to_string());

        if let Err(e) = self.rewrite(&slots) {
            match previous {
                Some(old) => slots.insert(key.to_string(), old),
                None => slots.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.write();
        let Some(previous) = slots.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.rewrite(&slots) {
            slots.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
