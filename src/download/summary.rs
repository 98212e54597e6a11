//! Download summary functionality.
//!
//! A [`Summary`] is produced for every [`Download`] the pool runs, whether it
//! succeeded or not. Summaries are never persisted: they feed the progress
//! log, the completion callback and the run's aggregate error.
//!
//! ```rust
//! use soundboard_dl::download::{Download, Status, Summary};
//! use soundboard_dl::manifest::WorkItem;
//! use reqwest::Url;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("https://example.com")?;
//! let download = Download::new(0, WorkItem::new("hello"), &base, Path::new("sounds"))?;
//!
//! let summary = Summary::new(download).with_size(2048).with_status(Status::Success);
//! assert_eq!(summary.size_kb(), 2);
//! # Ok(())
//! # }
//! ```

use super::download::Download;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download completed successfully
    Success,
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded clip.
    download: Download,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for a download that has not run yet.
    pub fn new(download: Download) -> Self {
        Self {
            download,
            size: 0,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Record the number of bytes written.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(msg.to_string()),
            ..self
        }
    }

    /// Get the summary's size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the summary's size in whole kilobytes, truncated.
    pub fn size_kb(&self) -> u64 {
        self.size / 1024
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the clip ended up on disk.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// The failure message, if the download failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Fail(msg) => Some(msg),
            _ => None,
        }
    }
}
