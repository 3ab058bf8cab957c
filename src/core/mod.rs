pub mod checks;
pub mod harness;
pub mod runner;

pub use crate::domain::model::{
    CheckOutcome, CheckResult, DownloadEvent, Link, RetrievedFile, ScenarioReport,
};
pub use crate::domain::ports::{HarnessConfig, Page};
pub use crate::utils::error::Result;
