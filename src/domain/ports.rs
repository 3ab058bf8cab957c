use crate::domain::model::{DownloadEvent, Link};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The consumed trigger surface: a page exposing downloadable links. The
/// harness only needs to resolve a link, invoke it, and wait for the
/// completion signal of the transfer it started.
#[async_trait]
pub trait Page: Send + Sync {
    /// Resolve a download link by its visible text.
    fn find_link(&self, name: &str) -> Result<Link>;

    /// Start the transfer behind `link`. Returns once the transfer has been
    /// issued; completion is reported through `next_download`.
    async fn click(&self, link: &Link) -> Result<()>;

    /// Wait for the next completed transfer on this page.
    async fn next_download(&self) -> Result<DownloadEvent>;

    /// Ambient bound on how long `next_download` may be awaited.
    fn default_timeout(&self) -> Duration;
}

pub trait HarnessConfig: Send + Sync {
    fn page_url(&self) -> &str;
    fn download_dir(&self) -> &str;
    fn timeout(&self) -> Duration;
}
