//! Error handling for soundboard-dl.
//!
//! Every fallible operation in the library returns [`Result`]. Manifest-stage
//! errors are propagated to the caller and end the run; per-clip errors are
//! folded into a [`Summary`](crate::download::Summary) by the downloader and
//! never escape the worker pool.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen while mirroring a soundboard.
#[derive(Error, Debug)]
pub enum Error {
    /// The base endpoint cannot be used to build request URLs.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Raised while creating the output directories or writing a clip to disk.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Usually a broken connection while streaming a response body.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack while sending a request.
    #[error("HTTP request failed: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a non-success status.
    ///
    /// `url` is the final, redirect-resolved URL with percent-encoding undone.
    #[error("{status}: {url}")]
    Status { status: StatusCode, url: String },

    /// The manifest body is not a nested list of clips.
    #[error("Malformed manifest: {source}")]
    Manifest {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for operations that can fail with a soundboard-dl error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = Error::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://example.com/sounds/あ.mp3".into(),
        };
        assert_eq!(
            err.to_string(),
            "404 Not Found: https://example.com/sounds/あ.mp3"
        );
    }

    #[test]
    fn test_manifest_error_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = Error::from(source);
        assert!(err.to_string().starts_with("Malformed manifest"));
    }
}
