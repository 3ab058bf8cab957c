pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::HarnessSettings;

pub use crate::adapters::HttpPage;
pub use crate::core::harness::DownloadHarness;
pub use crate::core::runner::ScenarioRunner;
pub use crate::utils::error::{HarnessError, Result};
