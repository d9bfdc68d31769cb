//! Persistence of the two texts between sessions

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The two named text slots, stored verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slots {
    pub text1: String,
    pub text2: String,
}

/// A JSON file holding [`Slots`]
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/diffbro/slots.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("diffbro").join("slots.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read both slots. Anything unreadable comes back as empty text.
    pub fn load(&self) -> Slots {
        match self.try_load() {
            Ok(slots) => slots,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "failed to load slots: {err:#}");
                Slots::default()
            }
        }
    }

    fn try_load(&self) -> Result<Slots> {
        if !self.path.exists() {
            return Ok(Slots::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let slots = serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt slot file {}", self.path.display()))?;
        Ok(slots)
    }

    /// Write to a sibling temp file and rename it over the slot file, so a
    /// crash mid-save leaves the previous contents intact
    pub fn save(&self, slots: &Slots) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let raw = serde_json::to_string(slots)?;
        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
        tmp.write_all(raw.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .map_err(|err| err.error)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Save, logging instead of failing
    pub fn save_or_log(&self, slots: &Slots) {
        if let Err(err) = self.save(slots) {
            tracing::error!(path = %self.path.display(), "failed to save slots: {err:#}");
        }
    }
}
