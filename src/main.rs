use color_eyre::{eyre::Report, Result};
use indicatif::MultiProgress;
use soundboard_dl::{coordinator, progress::LogWriter, DownloaderBuilder};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let multi = MultiProgress::new();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(LogWriter::new(multi.clone()))
        .init();

    let downloader = DownloaderBuilder::new().multi_progress(multi).build();
    if let Err(e) = coordinator::run(&downloader).await {
        error!("{:#}", Report::new(e));
        std::process::exit(1);
    }

    Ok(())
}
