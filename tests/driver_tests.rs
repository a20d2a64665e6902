// Integration tests for a full pass over a PS5 capture tree

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ps5_media_rename::locator::ScanDirs;
use ps5_media_rename::{ConfigBuilder, Driver, RunSummary};
use tempfile::TempDir;

fn write_files(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for file in files {
        fs::write(dir.join(file), b"").unwrap();
    }
}

fn driver_for(root: PathBuf) -> Driver {
    let config = ConfigBuilder::new()
        .root_candidates(vec![root])
        .scan_delay(Duration::ZERO)
        .build()
        .unwrap();
    Driver::new(config).unwrap()
}

#[test]
fn test_full_pass_over_both_media_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("CREATE");
    write_files(&root.join("Video Clips/Astro Bot"), &["clip_b.webm", "clip_a.webm"]);
    write_files(&root.join("Screenshots/Grand Theft Auto V!"), &["1.png"]);
    write_files(&root.join("Screenshots/Returnal"), &["shot.jpg", "index.db"]);

    let summary = driver_for(root.clone()).run();

    assert_eq!(
        summary,
        RunSummary {
            directories: 3,
            renamed: 4,
            deleted: 0,
            failed: 0,
            directory_errors: 0,
        }
    );
    assert!(root.join("Video Clips/Astro Bot/Astro-Bot-000.webm").is_file());
    assert!(root.join("Video Clips/Astro Bot/Astro-Bot-001.webm").is_file());
    assert!(root.join("Screenshots/Grand Theft Auto V!/Grand-Theft-Auto-V-000.png").is_file());
    assert!(root.join("Screenshots/Returnal/Returnal-000.jpg").is_file());
    assert!(root.join("Screenshots/Returnal/index.db").is_file());
}

#[test]
fn test_second_pass_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("CREATE");
    write_files(&root.join("Video Clips/GameA"), &["foo.mp4", "bar.mp4"]);
    let driver = driver_for(root);

    let first = driver.run();
    let second = driver.run();

    assert_eq!(first.renamed, 2);
    assert_eq!(second.directories, 1);
    assert_eq!(second.renamed, 0);
    assert_eq!(second.deleted, 0);
}

#[test]
fn test_loose_files_and_missing_dirs_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("CREATE");
    write_files(&root.join("Video Clips"), &["stray.mp4", ".DS_Store"]);
    write_files(&root.join("Video Clips/GameA"), &["a.mp4"]);

    let summary = driver_for(root.clone()).run();

    assert_eq!(summary.directories, 1);
    assert_eq!(summary.renamed, 1);
    assert!(root.join("Video Clips/stray.mp4").is_file());
    assert!(!root.join("Screenshots").exists());
}

#[test]
fn test_nothing_to_do_without_media_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .scan_delay(Duration::ZERO)
        .build()
        .unwrap();
    let driver =
        Driver::with_scan_dirs(config, ScanDirs::under(&temp_dir.path().join("PS5/CREATE")))
            .unwrap();

    assert_eq!(driver.run(), RunSummary::default());
}

#[test]
fn test_locates_second_candidate() {
    let temp_dir = TempDir::new().unwrap();
    let ps5 = temp_dir.path().join("PS5/CREATE");
    let create = temp_dir.path().join("CREATE");
    write_files(&create.join("Screenshots/GameB"), &["x.png"]);

    let config = ConfigBuilder::new()
        .root_candidates(vec![ps5, create.clone()])
        .scan_delay(Duration::ZERO)
        .build()
        .unwrap();
    let driver = Driver::new(config).unwrap();

    assert_eq!(driver.scan_dirs(), &ScanDirs::under(&create));
    assert_eq!(driver.run().renamed, 1);
    assert!(create.join("Screenshots/GameB/GameB-000.png").is_file());
}
