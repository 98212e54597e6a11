//! Configuration structures and defaults for the downloader.
//!
//! The defaults describe the one run the binary performs: mirror the
//! soundboard at [`BASE_URL`] into [`OUTPUT_DIR`], one worker per available
//! CPU, no retries.

use crate::download::Summary;
use crate::StyleOptions;

use indicatif::MultiProgress;
use reqwest::header::HeaderMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

/// Base endpoint serving the manifest and the clips.
pub const BASE_URL: &str = "https://www.natorisana.love";

/// Local directory the clips are written to.
pub const OUTPUT_DIR: &str = "sounds";

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Number of parallel execution units of the host, at least 1.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Base endpoint, parsed when a run starts.
    pub base_url: String,
    /// Directory where to store the downloaded clips.
    pub directory: PathBuf,
    /// Number of maximum concurrent downloads.
    pub concurrent_downloads: usize,
    /// Number of retries per request.
    pub retries: u32,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Bar set the progress display draws into, shared with the log writer.
    pub multi_progress: MultiProgress,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("base_url", &self.base_url)
            .field("directory", &self.directory)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("retries", &self.retries)
            .field("style_options", &self.style_options)
            .field("headers", &self.headers)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            directory: PathBuf::from(OUTPUT_DIR),
            concurrent_downloads: available_parallelism(),
            retries: 0,
            style_options: StyleOptions::default(),
            multi_progress: MultiProgress::new(),
            headers: None,
            on_complete: None,
        }
    }
}
