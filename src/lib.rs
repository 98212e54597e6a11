//! soundboard-dl mirrors a soundboard's audio clips to the local disk.
//!
//! A run fetches the board's JSON manifest, flattens its nested groups into
//! one ordered list of clips and downloads every clip concurrently, with at
//! most one download per available CPU in flight. Clip names are
//! NFC-normalized for the request and sanitized for the local path.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use soundboard_dl::{coordinator, DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let downloader = DownloaderBuilder::new().build();
//! let summaries = coordinator::run(&downloader).await?;
//! println!("{} clips processed", summaries.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`manifest`] - the manifest model, its flattening and its retrieval
//! - [`download`] - the per-clip unit of work and its summary
//! - [`downloader`] - the bounded worker pool and its configuration
//! - [`coordinator`] - the end-to-end run
//! - [`error`] - the [`Error`] enum
//! - [`http`] - HTTP client and URL helpers
//! - [`progress`] - progress bars
//! - [`utils`] - filename sanitization and path derivation

pub mod coordinator;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod manifest;
pub mod progress;
pub mod utils;

pub use download::{Download, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use manifest::{flatten, Manifest, WorkItem};
pub use progress::{LogWriter, ProgressBarOpts, StyleOptions};
pub use utils::sanitize;
