//! The unit of work handed to the download pool.
//!
//! A [`Download`] is derived once from a [`WorkItem`] before dispatch, so each
//! worker owns everything it needs: its index, the request URL and the local
//! destination.
//!
//! ```rust
//! use soundboard_dl::download::Download;
//! use soundboard_dl::manifest::WorkItem;
//! use reqwest::Url;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("https://example.com")?;
//! let download = Download::new(0, WorkItem::new("greetings/hello"), &base, Path::new("sounds"))?;
//! assert_eq!(download.url.as_str(), "https://example.com/sounds/greetings/hello.mp3");
//! assert_eq!(download.destination, Path::new("sounds/greetings/hello.mp3"));
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::http::join_segments;
use crate::manifest::WorkItem;
use crate::utils::path::{destination, relative_path};

use reqwest::Url;
use std::path::{Path, PathBuf};

/// Segment of the base endpoint under which clips are served.
pub const SOUNDS_SEGMENT: &str = "sounds";

/// Represents a clip to be downloaded.
#[derive(Debug, Clone)]
pub struct Download {
    /// Position of the clip in the flattened manifest, starting at 0.
    pub index: usize,
    /// The manifest entry this download was derived from.
    pub item: WorkItem,
    /// NFC-normalized name plus extension, used in the URL and in logs.
    pub relative_path: String,
    /// URL of the clip on the asset endpoint.
    pub url: Url,
    /// Where the clip is written on disk.
    pub destination: PathBuf,
}

impl Download {
    /// Creates a new [`Download`] for the clip at `index`.
    pub fn new(index: usize, item: WorkItem, base: &Url, root: &Path) -> Result<Self> {
        let relative_path = relative_path(&item.file_name);
        let segments = std::iter::once(SOUNDS_SEGMENT)
            .chain(relative_path.split('/').filter(|s| !s.is_empty()));
        let url = join_segments(base, segments)?;
        let destination = destination(root, &relative_path);

        Ok(Self {
            index,
            item,
            relative_path,
            url,
            destination,
        })
    }

    /// Derives the downloads for a flattened manifest, keeping its order.
    pub fn from_items(items: Vec<WorkItem>, base: &Url, root: &Path) -> Result<Vec<Self>> {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Download::new(index, item, base, root))
            .collect()
    }
}
