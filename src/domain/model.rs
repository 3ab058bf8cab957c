use crate::utils::error::Result;
use std::path::PathBuf;
use url::Url;

/// A downloadable link on the page, identified by its visible text.
#[derive(Debug, Clone)]
pub struct Link {
    pub text: String,
    /// Absolute target, already resolved against the page URL.
    pub href: Url,
}

/// Completion signal for one transfer: staged bytes plus the filename the
/// remote side suggested for them.
#[derive(Debug, Clone)]
pub struct DownloadEvent {
    pub staging_path: PathBuf,
    pub suggested_name: String,
}

/// A file saved by one harness invocation. Immutable once written; the
/// harness never cleans it up.
#[derive(Debug, Clone)]
pub struct RetrievedFile {
    pub local_path: PathBuf,
    pub suggested_name: String,
}

impl RetrievedFile {
    /// Raw content, read on demand.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.local_path)?)
    }

    pub fn text(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.local_path)?)
    }
}

/// Outcome of a single verification step within a scenario. Failures are not
/// represented here: a failed check aborts the scenario with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Skipped(String),
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub file: RetrievedFile,
    pub checks: Vec<CheckResult>,
}

impl ScenarioReport {
    pub fn skipped_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks
            .iter()
            .filter(|c| matches!(c.outcome, CheckOutcome::Skipped(_)))
    }
}
