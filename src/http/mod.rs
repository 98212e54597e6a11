//! HTTP plumbing shared by the manifest fetcher and the downloader.
//!
//! - [`client`] - middleware-wrapped reqwest client creation
//! - [`url`] - request URL building and response status checks

pub mod client;
pub mod url;

pub use client::{create_http_client, HttpClientConfig};
pub use url::{display_url, ensure_success, join_segments};
