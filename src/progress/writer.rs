//! Log output that does not tear the progress bars.

use indicatif::MultiProgress;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;

/// Writes log lines to stdout while the bars of a [`MultiProgress`] are
/// suspended, so a line never lands in the middle of a redraw.
///
/// ```rust
/// use indicatif::MultiProgress;
/// use soundboard_dl::progress::LogWriter;
///
/// let multi = MultiProgress::new();
/// tracing_subscriber::fmt()
///     .with_writer(LogWriter::new(multi.clone()))
///     .finish();
/// ```
#[derive(Debug, Clone)]
pub struct LogWriter {
    multi: MultiProgress,
}

impl LogWriter {
    pub fn new(multi: MultiProgress) -> Self {
        Self { multi }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stdout().lock().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.multi.suspend(|| io::stdout().lock().flush())
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
