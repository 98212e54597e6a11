//! Shared utility functions.
//!
//! - [`sanitize`](mod@sanitize) - filesystem-safe path segments
//! - [`path`] - remote and local paths of a clip

pub mod path;
pub mod sanitize;

pub use path::{destination, relative_path, sanitized_segments, CLIP_EXTENSION};
pub use sanitize::{sanitize, MAX_LENGTH, REPLACEMENT};
