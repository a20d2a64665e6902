pub mod config;
pub mod driver;
pub mod locator;
pub mod natural_sort;
pub mod rename_engine;
pub mod tracking;

pub use config::{ConfigBuilder, RenamerConfig};
pub use driver::{Driver, RunSummary};
pub use rename_engine::{DirectoryReport, FileOutcome, RenameEngine};
