//! Derivation of remote and local paths for a clip.

use super::sanitize::sanitize;

use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Extension of every clip on the asset endpoint.
pub const CLIP_EXTENSION: &str = ".mp3";

/// Builds the clip path relative to the `sounds/` endpoint and output root.
///
/// The name is put in Unicode canonical composition form (NFC) first, so the
/// same clip always maps to the same request and the same file.
pub fn relative_path(file_name: &str) -> String {
    let mut path: String = file_name.nfc().collect();
    path.push_str(CLIP_EXTENSION);
    path
}

/// Splits a relative path into its sanitized directory and file name.
///
/// The directory portion is everything before the last `/` and is sanitized
/// as a single segment; it is `None` when the path has no directory.
pub fn sanitized_segments(relative: &str) -> (Option<String>, String) {
    match relative.rsplit_once('/') {
        Some((dir, file)) => {
            let dir = dir.trim_matches('/');
            let dir = (!dir.is_empty()).then(|| sanitize(dir));
            (dir, sanitize(file))
        }
        None => (None, sanitize(relative)),
    }
}

/// Computes where a clip is written below `root`.
pub fn destination(root: &Path, relative: &str) -> PathBuf {
    let (dir, file) = sanitized_segments(relative);
    match dir {
        Some(dir) => root.join(dir).join(file),
        None => root.join(file),
    }
}
