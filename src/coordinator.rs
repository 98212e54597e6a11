//! The run coordinator: manifest, then downloads, then a verdict.

use crate::download::Summary;
use crate::downloader::Downloader;
use crate::error::Result;
use crate::manifest::fetch_manifest;

use tracing::{error, info};

/// Mirrors the soundboard described by the downloader's configuration.
///
/// Fetching or decoding the manifest is fatal and returned as an error. Clip
/// failures are not: they are logged once, through the first failure
/// observed, and the summaries of every clip are returned.
pub async fn run(downloader: &Downloader) -> Result<Vec<Summary>> {
    let base = downloader.base()?;
    let client = downloader.http_client()?;

    let manifest = fetch_manifest(&client, &base).await?;
    let items = manifest.into_items();
    info!("Manifest lists {} clips", items.len());

    let downloads = downloader.prepare(items)?;
    let summaries = downloader.download(&client, &downloads).await;

    if let Some(message) = first_failure(&summaries).and_then(Summary::error) {
        let failures = summaries.iter().filter(|s| !s.is_success()).count();
        error!(failures, "{}", message);
    }

    info!("Done");
    Ok(summaries)
}

/// The first failed summary, in completion order.
pub fn first_failure(summaries: &[Summary]) -> Option<&Summary> {
    summaries.iter().find(|s| s.error().is_some())
}
