use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use ps5_media_rename::{ConfigBuilder, Driver, RunSummary};

#[derive(Parser)]
#[command(name = "ps5-media-rename")]
#[command(
    version,
    about = "Renames PS5 video clips and screenshots to <Game>-NNN.<ext>"
)]
struct Cli {
    /// Root directory to look for "Video Clips" and "Screenshots" (repeatable, first match wins)
    #[arg(short, long = "root")]
    roots: Vec<PathBuf>,

    /// Pause before scanning each game directory, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Exit without waiting for ENTER
    #[arg(long)]
    no_wait: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();

    match run(&cli) {
        Ok(summary) => print_summary(&summary),
        Err(e) => error!("An error occurred: {:#}", e),
    }

    if !cli.no_wait {
        pause_and_exit();
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let mut builder = ConfigBuilder::new().scan_delay(Duration::from_millis(cli.delay_ms));
    if !cli.roots.is_empty() {
        builder = builder.root_candidates(cli.roots.clone());
    }

    let driver = Driver::new(builder.build()?)?;
    Ok(driver.run())
}

fn print_summary(summary: &RunSummary) {
    println!("===================");
    println!(
        "Summary: {} director{} scanned, {} renamed, {} deleted, {} failed",
        summary.directories,
        if summary.directories == 1 { "y" } else { "ies" },
        summary.renamed,
        summary.deleted,
        summary.failed + summary.directory_errors,
    );
}

fn pause_and_exit() {
    println!("\n{}", "=".repeat(50));
    println!("Press ENTER to exit...");
    let _ = io::stdin().read_line(&mut String::new());
}
