//! Downloader module: the bounded worker pool, its builder and configuration.
//!
//! - `downloader` - the [`Downloader`] and its per-clip fetch logic
//! - `builder` - [`DownloaderBuilder`] for configuring a downloader
//! - `config` - configuration structures, defaults and callback types
//! - `pool` - bounded-concurrency execution used by the downloader
//!
//! ```rust
//! use soundboard_dl::downloader::DownloaderBuilder;
//!
//! let downloader = DownloaderBuilder::hidden()
//!     .on_complete(|summary| {
//!         if let Some(error) = summary.error() {
//!             eprintln!("{}: {}", summary.download().relative_path, error);
//!         }
//!     })
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod pool;

pub use builder::DownloaderBuilder;
pub use config::{available_parallelism, DownloadCallback, DownloaderConfig, BASE_URL, OUTPUT_DIR};
pub use downloader::Downloader;
pub use pool::run_bounded;
