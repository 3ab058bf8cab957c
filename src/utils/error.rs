use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Retrieval of '{link}' did not complete: no staged file within the page timeout")]
    RetrievalIncomplete { link: String },

    #[error("Failed to persist download to {}: {source}", path.display())]
    PersistError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Link '{name}' not found on page")]
    LinkNotFound { name: String },

    #[error("Content failed to parse: {reason}")]
    ParseError { reason: String },

    #[error("Capability unavailable: {capability}")]
    CapabilityUnavailable { capability: String },

    #[error("Check failed in scenario '{scenario}': {reason}")]
    CheckFailed { scenario: String, reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[cfg(feature = "workbook")]
    #[error("Workbook operation failed: {0}")]
    WorkbookError(String),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl HarnessError {
    /// Plain-language summary for the CLI, without source-chain noise.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RetrievalIncomplete { link } => {
                format!("The download of '{}' never completed", link)
            }
            Self::PersistError { path, .. } => {
                format!("Could not save the download to {}", path.display())
            }
            Self::LinkNotFound { name } => format!("The page has no link named '{}'", name),
            Self::ParseError { reason } => {
                format!("The downloaded content is not in the expected format: {}", reason)
            }
            Self::CapabilityUnavailable { capability } => {
                format!("The '{}' capability is not built into this binary", capability)
            }
            Self::CheckFailed { scenario, reason } => {
                format!("Verification of '{}' failed: {}", scenario, reason)
            }
            Self::HttpError(e) => format!("Could not reach the server: {}", e),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::RetrievalIncomplete { .. } => {
                "Check that the link actually triggers a download and the server is reachable"
            }
            Self::PersistError { .. } => {
                "Check free space and write permissions on the download directory"
            }
            Self::LinkNotFound { .. } => {
                "Run with --verbose to see which links the page exposes"
            }
            Self::ParseError { .. } | Self::CheckFailed { .. } => {
                "Inspect the saved file under the download directory"
            }
            Self::HttpError(_) => "Check the page URL and network connectivity",
            Self::InvalidConfigValue { .. } => "Fix the flagged configuration value and retry",
            _ => "See the log output for details",
        }
    }

    /// Exit code for the CLI. Infrastructure failures are distinguished from
    /// failed content checks.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ParseError { .. } | Self::CheckFailed { .. } => 1,
            Self::RetrievalIncomplete { .. } | Self::LinkNotFound { .. } | Self::HttpError(_) => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
