use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::{ORIGINALS_JSON, SCANNED_JSON};

/// A persisted list of filenames, kept in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingList(Vec<String>);

impl TrackingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the list at `path`. A missing, unreadable or malformed file yields
    /// an empty list; only the last two are logged.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        match Self::read(path) {
            Ok(list) => list,
            Err(e) => {
                error!("Error reading {}: {:#}", path.display(), e);
                Self::new()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let list = serde_json::from_str(&contents).context("Invalid tracking JSON")?;
        Ok(list)
    }

    /// Overwrites `path` with the list as indented JSON. Failures are logged.
    pub fn save(&self, path: &Path) {
        if let Err(e) = self.write(path) {
            error!("Error writing {}: {:#}", path.display(), e);
        }
    }

    fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|entry| entry == name)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn extend(&mut self, other: TrackingList) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TrackingList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// Both tracking lists of one game directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingRecord {
    /// Every name already handled, old and new.
    pub scanned: TrackingList,
    /// Old names that get deleted if they show up again.
    pub originals: TrackingList,
}

impl TrackingRecord {
    pub fn load(dir: &Path) -> Self {
        Self {
            scanned: TrackingList::load(&dir.join(SCANNED_JSON)),
            originals: TrackingList::load(&dir.join(ORIGINALS_JSON)),
        }
    }

    pub fn save(&self, dir: &Path) {
        self.scanned.save(&dir.join(SCANNED_JSON));
        self.originals.save(&dir.join(ORIGINALS_JSON));
    }
}
