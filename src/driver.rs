use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::config::RenamerConfig;
use crate::locator::{ScanDirs, locate_scan_dirs};
use crate::rename_engine::{DirectoryReport, RenameEngine};

/// Totals for one full pass over both media directories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: usize,
    pub renamed: usize,
    pub deleted: usize,
    pub failed: usize,
    /// Game directories that could not be read at all.
    pub directory_errors: usize,
}

impl RunSummary {
    fn record(&mut self, report: &DirectoryReport) {
        self.directories += 1;
        self.renamed += report.renamed();
        self.deleted += report.deleted();
        self.failed += report.failed();
    }
}

pub struct Driver {
    engine: RenameEngine,
    scan_dirs: ScanDirs,
}

impl Driver {
    /// Resolves the root from the configured candidates.
    pub fn new(config: RenamerConfig) -> Result<Self> {
        let scan_dirs = locate_scan_dirs(&config.root_candidates);
        Self::with_scan_dirs(config, scan_dirs)
    }

    pub fn with_scan_dirs(config: RenamerConfig, scan_dirs: ScanDirs) -> Result<Self> {
        Ok(Self {
            engine: RenameEngine::new(config)?,
            scan_dirs,
        })
    }

    pub fn scan_dirs(&self) -> &ScanDirs {
        &self.scan_dirs
    }

    pub fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for (kind, scan_dir) in self.scan_dirs.iter() {
            if !scan_dir.is_dir() {
                warn!("{} not found!", scan_dir.display());
                continue;
            }

            debug!("Processing {}", kind);
            let game_dirs = match self.game_directories(scan_dir) {
                Ok(dirs) => dirs,
                Err(e) => {
                    error!("{:#}", e);
                    continue;
                }
            };

            self.process_game_dirs(scan_dir, &game_dirs, &mut summary);
        }

        info!("[COMPLETED]");
        summary
    }

    /// A directory that fails is logged and counted; its siblings still run.
    fn process_game_dirs(&self, scan_dir: &Path, dir_names: &[String], summary: &mut RunSummary) {
        for dir_name in dir_names {
            match self.engine.process_directory(&scan_dir.join(dir_name)) {
                Ok(report) => summary.record(&report),
                Err(e) => {
                    error!("{:#}", e);
                    summary.directory_errors += 1;
                }
            }
        }
    }

    fn game_directories(&self, scan_dir: &Path) -> Result<Vec<String>> {
        let names = self.engine.list_entries(scan_dir)?;

        Ok(names
            .into_iter()
            .filter(|name| {
                let is_dir = scan_dir.join(name).is_dir();
                if !is_dir {
                    debug!("Skipping non-directory entry {}", name);
                }
                is_dir
            })
            .collect())
    }
}
