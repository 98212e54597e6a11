//! Terminal progress bars.
//!
//! - `style` - progress bar styling options and templates
//! - `display` - progress bar coordination during a run
//! - `writer` - log output that suspends the bars while it writes
//!
//! ```rust
//! use soundboard_dl::progress::{ProgressBarOpts, StyleOptions};
//!
//! let quiet_children = StyleOptions::new(
//!     StyleOptions::default().main().clone(),
//!     ProgressBarOpts::hidden(),
//! );
//! assert!(quiet_children.is_enabled());
//! ```

pub(crate) mod display;
pub(crate) mod style;
pub(crate) mod writer;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
pub use writer::LogWriter;
