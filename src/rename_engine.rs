use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, error, info, warn};

use crate::config::RenamerConfig;
use crate::natural_sort::natural_sort;
use crate::tracking::{TrackingList, TrackingRecord};

const FALLBACK_INDEX: u32 = 999;

/// What happened to a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed { from: String, to: String },
    /// Listed in originals (and not in scanned) and removed from disk.
    Deleted(String),
    PreviouslyProcessed(String),
    /// Subdirectories and reserved files are left alone.
    Skipped(String),
    Failed { name: String, error: String },
}

#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub directory: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl DirectoryReport {
    fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
            outcomes: Vec::new(),
        }
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Renamed { .. }))
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Deleted(_)))
    }

    pub fn previously_processed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::PreviouslyProcessed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    /// Pairs of (old name, new name) in processing order.
    pub fn renames(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Renamed { from, to } => Some((from.as_str(), to.as_str())),
                _ => None,
            })
            .collect()
    }

    /// True when the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.renamed() == 0 && self.deleted() == 0
    }
}

#[derive(Debug)]
pub struct RenameEngine {
    config: RenamerConfig,
    slug_pattern: Regex,
}

impl RenameEngine {
    pub fn new(config: RenamerConfig) -> Result<Self> {
        let slug_pattern = Regex::new(r"[^A-Za-z0-9 ]")?;

        Ok(Self {
            config,
            slug_pattern,
        })
    }

    /// Drops everything but ASCII letters, digits and spaces, then turns spaces into hyphens.
    pub fn directory_slug(&self, dir_name: &str) -> String {
        self.slug_pattern
            .replace_all(dir_name, "")
            .replace(' ', "-")
    }

    /// First `<base>-NNN<extension>` not present in `directory`, probing upward
    /// from `start_index`. Returns the name and the index it used.
    pub fn find_available_filename(
        &self,
        directory: &Path,
        base_name: &str,
        extension: &str,
        start_index: u32,
    ) -> (String, u32) {
        for i in start_index..self.config.max_filename_attempts {
            let new_name = numbered_name(base_name, i, extension);
            if !entry_exists(&directory.join(&new_name)) {
                return (new_name, i);
            }
        }

        (numbered_name(base_name, FALLBACK_INDEX, extension), FALLBACK_INDEX)
    }

    /// Lists the candidate entries of `dir`, minus ignored names, in natural order.
    pub fn list_entries(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Error reading directory {}", dir.display()))?
        {
            let entry =
                entry.with_context(|| format!("Error reading directory {}", dir.display()))?;
            match entry.file_name().into_string() {
                Ok(name) if self.config.is_ignored(&name) => {}
                Ok(name) => names.push(name),
                Err(raw) => warn!("Skipping non UTF-8 name {:?} in {}", raw, dir.display()),
            }
        }

        natural_sort(&mut names);
        Ok(names)
    }

    /// Renames every untracked file in one game directory and updates its
    /// tracking lists. Errors only when the directory itself can't be read;
    /// per-file failures are recorded in the report.
    pub fn process_directory(&self, dir: &Path) -> Result<DirectoryReport> {
        let mut record = TrackingRecord::load(dir);

        info!("Scanning {}", dir.display());
        if !self.config.scan_delay.is_zero() {
            thread::sleep(self.config.scan_delay);
        }

        if !dir.is_dir() {
            return Err(anyhow::anyhow!("ERROR: Not a directory: {}", dir.display()));
        }

        let files = self.list_entries(dir)?;
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let slug = self.directory_slug(&dir_name);

        let mut counter = 0;
        let mut processed_files = TrackingList::new();
        let mut processed_originals = TrackingList::new();
        let mut report = DirectoryReport::new(dir);

        for filename in files {
            let file_path = dir.join(&filename);

            if record.scanned.contains(&filename) {
                info!("Previously Processed: {}", filename);
                report.outcomes.push(FileOutcome::PreviouslyProcessed(filename));
                continue;
            }

            if record.originals.contains(&filename) {
                info!("DELETE: {}", filename);
                let outcome = match fs::remove_file(&file_path) {
                    Ok(()) => FileOutcome::Deleted(filename),
                    Err(e) => {
                        error!("Error deleting {}: {}", filename, e);
                        FileOutcome::Failed {
                            name: filename,
                            error: e.to_string(),
                        }
                    }
                };
                report.outcomes.push(outcome);
                continue;
            }

            if !file_path.is_file() || self.config.is_reserved(&filename) {
                debug!("Skipping {}", filename);
                report.outcomes.push(FileOutcome::Skipped(filename));
                continue;
            }

            let extension = extension_with_dot(&filename);
            let (new_name, index) =
                self.find_available_filename(dir, &slug, &extension, counter);
            counter = index;
            let new_path = dir.join(&new_name);

            if entry_exists(&new_path) {
                error!(
                    "Error renaming {}: no free name left, {} already exists",
                    filename, new_name
                );
                report.outcomes.push(FileOutcome::Failed {
                    name: filename,
                    error: format!("{} already exists", new_name),
                });
                continue;
            }

            match fs::rename(&file_path, &new_path) {
                Ok(()) => {
                    info!("ADDING: {}", new_name);
                    processed_originals.push(filename.clone());
                    processed_files.push(filename.clone());
                    processed_files.push(new_name.clone());
                    counter += 1;
                    report.outcomes.push(FileOutcome::Renamed {
                        from: filename,
                        to: new_name,
                    });
                }
                Err(e) => {
                    error!("Error renaming {}: {}", filename, e);
                    report.outcomes.push(FileOutcome::Failed {
                        name: filename,
                        error: e.to_string(),
                    });
                }
            }
        }

        record.scanned.extend(processed_files);
        record.originals.extend(processed_originals);
        record.save(dir);

        Ok(report)
    }
}

fn numbered_name(base_name: &str, index: u32, extension: &str) -> String {
    format!("{}-{:03}{}", base_name, index, extension)
}

fn extension_with_dot(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

// Dangling symlinks count as taken.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
