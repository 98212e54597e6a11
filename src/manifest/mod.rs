//! The remote manifest: what to download.
//!
//! - [`item`] - [`WorkItem`] and the nested [`Manifest`] document
//! - [`flatten`] - turns nested groups into one ordered list
//! - [`fetch`] - retrieves the manifest from the base endpoint

pub mod fetch;
pub mod flatten;
pub mod item;

pub use fetch::{fetch_manifest, manifest_url};
pub use flatten::flatten;
pub use item::{Entry, Manifest, WorkItem};
