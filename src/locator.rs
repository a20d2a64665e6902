use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{DEFAULT_ROOT_CANDIDATES, SCREENSHOTS_DIR, VIDEO_CLIPS_DIR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    VideoClips,
    Screenshots,
}

impl MediaKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::VideoClips => VIDEO_CLIPS_DIR,
            MediaKind::Screenshots => SCREENSHOTS_DIR,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The two media directories under the chosen root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDirs {
    pub video_clips: PathBuf,
    pub screenshots: PathBuf,
}

impl ScanDirs {
    pub fn under(root: &Path) -> Self {
        Self {
            video_clips: root.join(VIDEO_CLIPS_DIR),
            screenshots: root.join(SCREENSHOTS_DIR),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MediaKind, &Path)> {
        [
            (MediaKind::VideoClips, self.video_clips.as_path()),
            (MediaKind::Screenshots, self.screenshots.as_path()),
        ]
        .into_iter()
    }
}

/// Picks the first candidate root that has either media directory. When none
/// do, the first default root is returned so later existence checks skip it.
pub fn locate_scan_dirs(candidates: &[PathBuf]) -> ScanDirs {
    for root in candidates {
        let dirs = ScanDirs::under(root);
        if dirs.video_clips.is_dir() || dirs.screenshots.is_dir() {
            info!("Found root directory: {}", root.display());
            return dirs;
        }
    }

    warn!("Warning: Could not find PS5 or CREATE directories");
    ScanDirs::under(Path::new(DEFAULT_ROOT_CANDIDATES[0]))
}
