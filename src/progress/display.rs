//! Progress bar display management.

use crate::progress::StyleOptions;

use indicatif::{MultiProgress, ProgressBar};

/// Coordinates the main clip counter and the per-clip byte bars.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for `total` clips, drawing into `multi`.
    ///
    /// Disabled bars are never added to `multi`, so a hidden display leaves
    /// it untouched.
    pub fn new(style_options: StyleOptions, multi: MultiProgress, total: usize) -> Self {
        let main = style_options.main().clone().to_progress_bar(total as u64);
        // Adding a bar to the multi gives it the multi's draw target.
        let main = match style_options.main().enabled {
            true => multi.add(main),
            false => main,
        };
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a byte progress bar for one clip.
    ///
    /// `size` is zero when the server sent no content length.
    pub fn create_child_progress(&self, size: u64, label: &str) -> ProgressBar {
        let pb = self.style_options.child().clone().to_progress_bar(size);
        let pb = match self.style_options.child().enabled {
            true => self.multi.add(pb),
            false => pb,
        };
        pb.set_message(label.to_string());
        pb
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Count one more clip as settled, successful or not.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish the progress display, clearing or keeping the main bar.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
