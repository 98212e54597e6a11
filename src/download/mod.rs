//! Download module containing the per-clip unit of work and its outcome.
//!
//! - [`download`] - the [`Download`] struct and its URL/path derivation
//! - [`summary`] - result tracking and status reporting

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::{Status, Summary};
