//! Core downloader implementation with fetch logic.
//!
//! The [`Downloader`] fans a list of [`Download`]s out over a bounded pool
//! (see [`run_bounded`]) and writes each clip to disk. A clip that fails is
//! turned into a failed [`Summary`]; it never interrupts the others.

use super::config::DownloaderConfig;
use super::pool::run_bounded;
use crate::download::{Download, Status, Summary};
use crate::error::{Error, Result};
use crate::http::{create_http_client, ensure_success, HttpClientConfig};
use crate::manifest::WorkItem;
use crate::progress::display::ProgressDisplay;

use futures::StreamExt;
use indicatif::{MultiProgress, ProgressBar};
use reqwest::{header::HeaderMap, Response, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tokio::{
    fs::{DirBuilder, File},
    io::AsyncWriteExt,
};
use tracing::{debug, info};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// use soundboard_dl::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// assert_eq!(d.base_url(), "https://www.natorisana.love");
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl fmt::Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the configured base endpoint.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the directory where clips will be written.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of concurrent downloads.
    pub fn concurrent_downloads(&self) -> usize {
        self.config.concurrent_downloads
    }

    /// Gets the number of retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the bar set the progress display draws into.
    pub fn multi_progress(&self) -> &MultiProgress {
        &self.config.multi_progress
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Parses the configured base endpoint.
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.config.base_url).map_err(|e| {
            Error::InvalidUrl(format!(
                "The url \"{}\" cannot be parsed: {}",
                self.config.base_url, e
            ))
        })
    }

    /// Builds the HTTP client shared by the manifest fetch and the downloads.
    pub fn http_client(&self) -> Result<ClientWithMiddleware> {
        let config = HttpClientConfig {
            retries: self.config.retries,
            headers: self.config.headers.clone(),
        };
        Ok(create_http_client(config)?)
    }

    /// Derives the downloads for a flattened manifest.
    pub fn prepare(&self, items: Vec<WorkItem>) -> Result<Vec<Download>> {
        Download::from_items(items, &self.base()?, &self.config.directory)
    }

    /// Downloads every clip, at most `concurrent_downloads` at a time.
    ///
    /// Returns one summary per download, in completion order.
    pub async fn download(
        &self,
        client: &ClientWithMiddleware,
        downloads: &[Download],
    ) -> Vec<Summary> {
        let total = downloads.len();
        let progress_display = ProgressDisplay::new(
            self.config.style_options.clone(),
            self.config.multi_progress.clone(),
            total,
        );

        let summaries = run_bounded(downloads, self.config.concurrent_downloads, |d| {
            self.fetch(client, d, total, &progress_display)
        })
        .await;

        progress_display.finish();
        summaries
    }

    /// Fetches one clip and reports its outcome.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        total: usize,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let summary = Summary::new(download.clone());
        let summary = match self.try_fetch(client, download, progress_display).await {
            Ok(size) => {
                info!(
                    "[{}/{}] {} [{} KB]",
                    download.index + 1,
                    total,
                    download.relative_path,
                    size / 1024
                );
                summary.with_size(size).with_status(Status::Success)
            }
            Err(e) => {
                debug!("Failed to download {}: {}", download.relative_path, e);
                summary.fail(e)
            }
        };

        progress_display.increment_main();

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    async fn try_fetch(
        &self,
        client: &ClientWithMiddleware,
        download: &Download,
        progress_display: &ProgressDisplay,
    ) -> Result<u64> {
        debug!("Fetching {}", &download.url);
        let res = ensure_success(client.get(download.url.clone()).send().await?)?;

        let pb = progress_display
            .create_child_progress(res.content_length().unwrap_or(0), &download.relative_path);
        let written = write_to_disk(res, &download.destination, &pb).await;
        progress_display.finish_child(pb);

        written
    }
}

/// Streams a response body into `output`, creating parent directories.
///
/// The file is truncated if it exists. The response and the file are dropped
/// before returning, on success and on error alike.
async fn write_to_disk(res: Response, output: &Path, pb: &ProgressBar) -> Result<u64> {
    if let Some(output_dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating destination directory {:?}", output_dir);
        create_dir_all(output_dir).await?;
    }

    debug!("Creating destination file {:?}", output);
    let mut file = File::create(output).await?;

    let mut size: u64 = 0;
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        let chunk_size = chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
        size += chunk_size;
        pb.inc(chunk_size);
    }
    file.flush().await?;

    Ok(size)
}

async fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).await
}
