//! Manifest data model.
//!
//! The manifest is a JSON array of groups of clips. The live endpoint nests
//! clips three levels deep (`[[[clip]]]`), older dumps two levels deep; both
//! decode into the same [`Manifest`].
//!
//! A clip without a `file-name`, or a `null` where a clip is expected, decodes
//! as a clip with a blank name. It fails on its own when it is downloaded
//! instead of rejecting the whole manifest.

use super::flatten::flatten;
use crate::error::Result;

use serde::Deserialize;

/// One downloadable clip listed in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkItem {
    /// Clip path relative to the `sounds/` directory, without extension.
    #[serde(rename = "file-name", default)]
    pub file_name: String,
    /// Whatever the soundboard attaches to the button. Never inspected.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl WorkItem {
    /// Creates a [`WorkItem`] with a `null` value.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            value: serde_json::Value::Null,
        }
    }
}

/// A node of the manifest tree: either a group of nodes or a clip.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Group(Vec<Entry>),
    Item(WorkItem),
    Blank,
}

impl Entry {
    fn into_items(self) -> Vec<WorkItem> {
        match self {
            Entry::Item(item) => vec![item],
            Entry::Blank => vec![WorkItem::default()],
            Entry::Group(entries) => flatten(entries.into_iter().map(Entry::into_items).collect()),
        }
    }
}

/// The decoded manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<Entry>,
}

impl Manifest {
    /// Decodes a manifest from a raw JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Flattens the manifest into the ordered list of clips.
    ///
    /// The position of a clip in the returned list is its progress index.
    pub fn into_items(self) -> Vec<WorkItem> {
        flatten(self.entries.into_iter().map(Entry::into_items).collect())
    }
}
