use crate::config::{DEFAULT_DOWNLOAD_DIR, DEFAULT_PAGE_URL};
use crate::domain::ports::HarnessConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fetch-verify")]
#[command(about = "Download files from a link page and verify the saved content")]
pub struct CliConfig {
    /// Page exposing the download links.
    #[arg(long, default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    /// Directory the downloads are saved into. Created if missing;
    /// same-named files are overwritten.
    #[arg(long, default_value = DEFAULT_DOWNLOAD_DIR)]
    pub download_dir: String,

    /// Seconds to wait for each transfer to complete.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl HarnessConfig for CliConfig {
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

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("page_url", &self.page_url)?;
        validate_path("download_dir", &self.download_dir)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
