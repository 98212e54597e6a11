use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use soundboard_dl::{Downloader, DownloaderBuilder, Summary};
use tempfile::TempDir;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MANIFEST_PATH: &str = "/api/v1/buttons.json";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates clip content of the given size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

/// Builds a manifest entry the way the soundboard serves it
pub fn button(file_name: &str) -> Value {
    json!({ "file-name": file_name, "value": { "label": file_name } })
}

/// Starts a mock soundboard serving `manifest`
pub async fn start_board(manifest: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest))
        .mount(&server)
        .await;
    server
}

/// Serves `body` at `clip_path` on the mock soundboard
pub async fn mount_clip(server: &MockServer, clip_path: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(clip_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Answers `status` at `clip_path` on the mock soundboard
pub async fn mount_status(server: &MockServer, clip_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(clip_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Creates a quiet downloader pointed at the mock soundboard
pub fn create_test_downloader_builder(server: &MockServer, dir: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .base_url(server.uri())
        .directory(dir.to_path_buf())
        .concurrent_downloads(2)
}

/// Creates a quiet downloader that records every completed summary
pub fn create_recording_downloader(
    server: &MockServer,
    dir: &Path,
) -> (Downloader, Arc<Mutex<Vec<Summary>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let downloader = create_test_downloader_builder(server, dir)
        .on_complete(move |summary| sink.lock().unwrap().push(summary.clone()))
        .build();
    (downloader, seen)
}

/// Asserts that a file exists with exactly the given content
pub fn assert_file_contents(path: &Path, expected: &[u8]) {
    let actual = fs::read(path).unwrap_or_else(|e| panic!("Cannot read {:?}: {}", path, e));
    assert_eq!(actual, expected, "File content mismatch at path: {:?}", path);
}

/// Counts the regular files below `dir`
pub fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
        .sum()
}

/// Log output captured from the tracing subscriber of the current thread
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Returns the captured lines, without ANSI colors
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Returns the lines logged at `level`, e.g. `"ERROR"`
    pub fn at_level(&self, level: &str) -> Vec<String> {
        let marker = format!(" {level} ");
        self.lines()
            .into_iter()
            .filter(|line| line.contains(&marker))
            .collect()
    }

    /// Checks whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Captures `info` and above for as long as the guard lives
///
/// The subscriber is scoped to the current thread, which is where a
/// `#[tokio::test]` runs its futures.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
