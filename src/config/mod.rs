#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::HarnessConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PAGE_URL: &str = "https://the-internet.herokuapp.com/download";
pub const DEFAULT_DOWNLOAD_DIR: &str = "./download";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Plain settings for library callers and tests; the CLI wraps the same
/// fields with clap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessSettings {
    pub page_url: String,
    pub download_dir: String,
    pub timeout_secs: u64,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            download_dir: DEFAULT_DOWNLOAD_DIR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HarnessConfig for HarnessSettings {
    fn page_url(&self) -> &str {
        &self.page_url
    }

    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for HarnessSettings {
    fn validate(&self) -> Result<()> {
        validate_url("page_url", &self.page_url)?;
        validate_path("download_dir", &self.download_dir)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
