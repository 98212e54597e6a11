//! Builder pattern implementation for creating Downloader instances.
//!
//! ```rust
//! use soundboard_dl::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .base_url("http://localhost:8080")
//!     .directory(PathBuf::from("mirror"))
//!     .concurrent_downloads(4)
//!     .build();
//! assert_eq!(downloader.concurrent_downloads(), 4);
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::StyleOptions;

use indicatif::MultiProgress;
use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Downloader`].
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        DownloaderBuilder::default().style_options(StyleOptions::hidden())
    }

    /// Sets the endpoint serving the manifest and the clips.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the directory where to store the clips.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of concurrent downloads.
    ///
    /// Defaults to the host's available parallelism; `0` is treated as `1`.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads.max(1);
        self
    }

    /// Set the number of retries per request.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set the bar set the progress display draws into.
    ///
    /// Pass the same [`MultiProgress`] to a [`LogWriter`](crate::progress::LogWriter)
    /// so log lines are printed between redraws.
    pub fn multi_progress(mut self, multi_progress: MultiProgress) -> Self {
        self.config.multi_progress = multi_progress;
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback runs as soon as a clip settles, successfully or not,
    /// while other clips may still be in flight.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Add the http headers, merged with any set before.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.config.headers.take().unwrap_or_default();
        new.extend(headers);
        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.config.headers.take().unwrap_or_default();
        new.insert(name, value);
        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
