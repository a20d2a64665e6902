use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

pub const SCANNED_JSON: &str = "_scanned.json";
pub const ORIGINALS_JSON: &str = "_originals.json";
pub const VIDEO_CLIPS_DIR: &str = "Video Clips";
pub const SCREENSHOTS_DIR: &str = "Screenshots";

pub const DEFAULT_ROOT_CANDIDATES: [&str; 2] = ["./PS5/CREATE", "./CREATE"];
pub const DEFAULT_MAX_FILENAME_ATTEMPTS: u32 = 1000;
pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_secs(1);

const DEFAULT_IGNORED: [&str; 5] = [".", "..", ".DS_Store", SCANNED_JSON, ORIGINALS_JSON];
const DEFAULT_RESERVED_SUFFIXES: [&str; 1] = [".db"];

/// Everything the renamer needs to know about the tree it walks.
#[derive(Debug, Clone)]
pub struct RenamerConfig {
    pub root_candidates: Vec<PathBuf>,
    pub ignored_entries: BTreeSet<String>,
    pub reserved_suffixes: Vec<String>,
    /// Pause before each game directory is scanned. Console pacing only.
    pub scan_delay: Duration,
    pub max_filename_attempts: u32,
}

impl RenamerConfig {
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_entries.contains(name)
    }

    /// Files ending in a reserved suffix (console database artifacts) are never renamed.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            root_candidates: DEFAULT_ROOT_CANDIDATES.iter().map(PathBuf::from).collect(),
            ignored_entries: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
            reserved_suffixes: DEFAULT_RESERVED_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            scan_delay: DEFAULT_SCAN_DELAY,
            max_filename_attempts: DEFAULT_MAX_FILENAME_ATTEMPTS,
        }
    }
}

pub struct ConfigBuilder {
    config: RenamerConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RenamerConfig::default(),
        }
    }

    pub fn root_candidates<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.root_candidates = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn scan_delay(mut self, delay: Duration) -> Self {
        self.config.scan_delay = delay;
        self
    }

    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.config.ignored_entries.insert(name.into());
        self
    }

    pub fn reserved_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.reserved_suffixes.push(suffix.into());
        self
    }

    pub fn max_filename_attempts(mut self, attempts: u32) -> Self {
        self.config.max_filename_attempts = attempts;
        self
    }

    pub fn build(self) -> Result<RenamerConfig> {
        if self.config.root_candidates.is_empty() {
            return Err(anyhow::anyhow!("At least one root candidate is required"));
        }
        if self.config.max_filename_attempts == 0 {
            return Err(anyhow::anyhow!("max_filename_attempts must be greater than zero"));
        }
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigBuilder::new().build().unwrap();

        assert_eq!(
            config.root_candidates,
            vec![PathBuf::from("./PS5/CREATE"), PathBuf::from("./CREATE")]
        );
        assert!(config.is_ignored(".DS_Store"));
        assert!(config.is_ignored(SCANNED_JSON));
        assert!(config.is_ignored(ORIGINALS_JSON));
        assert!(!config.is_ignored("clip.mp4"));
        assert_eq!(config.max_filename_attempts, 1000);
        assert_eq!(config.scan_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_reserved_suffix() {
        let config = ConfigBuilder::new().reserved_suffix(".tmp").build().unwrap();

        assert!(config.is_reserved("thumbs.db"));
        assert!(config.is_reserved("upload.tmp"));
        assert!(!config.is_reserved("clip.mp4"));
        assert!(!config.is_reserved("db"));
    }

    #[test]
    fn test_builder_rejects_empty_roots() {
        let empty: Vec<PathBuf> = Vec::new();
        assert!(ConfigBuilder::new().root_candidates(empty).build().is_err());
        assert!(ConfigBuilder::new().max_filename_attempts(0).build().is_err());
    }
}
