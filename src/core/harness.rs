use crate::domain::model::RetrievedFile;
use crate::domain::ports::Page;
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::path::PathBuf;
use tokio::time::timeout;

/// Triggers a retrieval from a page interaction and persists the result under
/// a known directory.
pub struct DownloadHarness<P: Page> {
    page: P,
    target_dir: PathBuf,
}

impl<P: Page> DownloadHarness<P> {
    pub fn new(page: P, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            page,
            target_dir: target_dir.into(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn target_dir(&self) -> &PathBuf {
        &self.target_dir
    }

    /// Click the link named `link_name` and save the resulting transfer as
    /// `target_dir / suggested_name`, where the name comes from the transfer
    /// metadata, not from the link text.
    ///
    /// The wait is registered before the click is driven, and both are polled
    /// as one joined operation, so the completion signal cannot be missed
    /// even when the transfer finishes immediately. No retries: any failure
    /// surfaces to the caller. Same-named files from earlier runs are
    /// overwritten silently.
    pub async fn retrieve(&self, link_name: &str) -> Result<RetrievedFile> {
        validate_non_empty_string("link_name", link_name)?;
        let link = self.page.find_link(link_name)?;
        tracing::info!("Retrieving '{}' from {}", link.text, link.href);

        let wait = timeout(self.page.default_timeout(), self.page.next_download());
        let (event, clicked) = tokio::join!(wait, self.page.click(&link));
        clicked?;
        let event = event.map_err(|_| HarnessError::RetrievalIncomplete {
            link: link_name.to_string(),
        })??;

        std::fs::create_dir_all(&self.target_dir)?;
        let local_path = self.target_dir.join(&event.suggested_name);
        std::fs::copy(&event.staging_path, &local_path).map_err(|source| {
            HarnessError::PersistError {
                path: local_path.clone(),
                source,
            }
        })?;

        tracing::info!("Saved '{}' to {}", event.suggested_name, local_path.display());
        Ok(RetrievedFile {
            local_path,
            suggested_name: event.suggested_name,
        })
    }
}
