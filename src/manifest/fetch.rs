//! Retrieval of the remote manifest.

use super::item::Manifest;
use crate::error::Result;
use crate::http::{ensure_success, join_segments};

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// Path of the manifest below the base endpoint.
pub const MANIFEST_PATH: [&str; 3] = ["api", "v1", "buttons.json"];

/// Builds the manifest URL for a base endpoint.
pub fn manifest_url(base: &Url) -> Result<Url> {
    join_segments(base, MANIFEST_PATH)
}

/// Downloads and decodes the manifest.
///
/// Any failure here is fatal for the run: transport errors, non-2xx statuses
/// and undecodable bodies are all returned as-is, without retrying.
pub async fn fetch_manifest(client: &ClientWithMiddleware, base: &Url) -> Result<Manifest> {
    let url = manifest_url(base)?;
    debug!("Fetching manifest {}", url);

    let res = ensure_success(client.get(url).send().await?)?;
    let body = res.bytes().await?;
    debug!("Manifest is {} bytes long", body.len());

    Manifest::from_slice(&body)
}
