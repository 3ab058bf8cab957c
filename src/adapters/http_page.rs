use crate::domain::model::{DownloadEvent, Link};
use crate::domain::ports::Page;
use crate::utils::error::{HarnessError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A link page reached over HTTP. "Clicking" a link issues the transfer on a
/// background task; the staged file and suggested filename come back as a
/// [`DownloadEvent`] on the page's event channel. Subscribing is implicit in
/// holding the page, so a listener attached before the click can never miss
/// the signal.
pub struct HttpPage {
    client: Client,
    url: Url,
    links: Vec<Link>,
    staging: Arc<tempfile::TempDir>,
    seq: AtomicU64,
    tx: mpsc::UnboundedSender<DownloadEvent>,
    rx: Mutex<mpsc::UnboundedReceiver<DownloadEvent>>,
    timeout: Duration,
}

impl HttpPage {
    /// Navigate to `url` and index the download links it exposes.
    pub async fn open(url: &str) -> Result<Self> {
        Self::open_with_client(Client::new(), url).await
    }

    pub async fn open_with_client(client: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| HarnessError::InvalidConfigValue {
            field: "page_url".to_string(),
            value: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Navigating to {}", url);
        let html = client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let links = parse_links(&url, &html);
        tracing::debug!("Found {} links on page", links.len());

        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            client,
            url,
            links,
            staging: Arc::new(tempfile::tempdir()?),
            seq: AtomicU64::new(0),
            tx,
            rx: Mutex::new(rx),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

#[async_trait]
impl Page for HttpPage {
    fn find_link(&self, name: &str) -> Result<Link> {
        self.links
            .iter()
            .find(|l| l.text == name)
            .cloned()
            .ok_or_else(|| HarnessError::LinkNotFound {
                name: name.to_string(),
            })
    }

    async fn click(&self, link: &Link) -> Result<()> {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let staging = Arc::clone(&self.staging);
        let link = link.clone();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);

        // A failed transfer produces no event; the waiter runs into its
        // timeout and reports RetrievalIncomplete.
        tokio::spawn(async move {
            if let Err(e) = fetch_to_staging(&client, &link, &staging, seq, &tx).await {
                tracing::warn!("Transfer of '{}' failed: {}", link.text, e);
            }
        });
        Ok(())
    }

    async fn next_download(&self) -> Result<DownloadEvent> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(HarnessError::RetrievalIncomplete {
            link: "(event channel closed)".to_string(),
        })
    }

    fn default_timeout(&self) -> Duration {
        self.timeout
    }
}

async fn fetch_to_staging(
    client: &Client,
    link: &Link,
    staging: &tempfile::TempDir,
    seq: u64,
    tx: &mpsc::UnboundedSender<DownloadEvent>,
) -> Result<()> {
    tracing::debug!("Fetching {}", link.href);
    let response = client
        .get(link.href.clone())
        .send()
        .await?
        .error_for_status()?;

    let suggested_name = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| filename_from_url(&link.href));

    let bytes = response.bytes().await?;
    let staging_path = staging.path().join(format!("{}-{}", seq, suggested_name));
    tokio::fs::write(&staging_path, &bytes).await?;
    tracing::debug!(
        "Staged {} bytes for '{}' at {}",
        bytes.len(),
        suggested_name,
        staging_path.display()
    );

    // Receiver dropped means nobody is waiting anymore; nothing to do.
    let _ = tx.send(DownloadEvent {
        staging_path,
        suggested_name,
    });
    Ok(())
}

/// Extract the download links from the page markup. Fixture pages use plain
/// `<a href="...">name</a>` anchors, so a tag-level scan is enough.
fn parse_links(base: &Url, html: &str) -> Vec<Link> {
    let anchor = Regex::new(r#"(?is)<a\s[^>]*href\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#)
        .expect("anchor pattern is valid");
    let tags = Regex::new(r"<[^>]+>").expect("tag pattern is valid");

    let mut links = Vec::new();
    for cap in anchor.captures_iter(html) {
        let text = tags.replace_all(&cap[2], "").trim().to_string();
        if text.is_empty() {
            continue;
        }
        match base.join(&cap[1]) {
            Ok(href) => links.push(Link { text, href }),
            Err(e) => tracing::warn!("Skipping link '{}' with bad href: {}", text, e),
        }
    }
    links
}

fn filename_from_disposition(value: &str) -> Option<String> {
    let re = Regex::new(r#"filename\s*=\s*"?([^";]+)"?"#).expect("disposition pattern is valid");
    re.captures(value)
        .map(|cap| cap[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

fn filename_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|s| !s.is_empty())
        .unwrap_or("download")
        .to_string()
}
