//! Progress bar styling options.
//!
//! The main bar counts finished clips; child bars show the bytes received for
//! each clip in flight and are cleared once the clip is written.

use indicatif::{ProgressBar, ProgressStyle};

/// Define the downloader style options.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the main progress bar.
    pub(crate) main: ProgressBarOpts,
    /// Style options for the child progress bar(s).
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_CLIPS.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BYTES.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
                enabled: true,
                clear: true,
            },
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Style options with every bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// Get a reference to the main progress bar options.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// Get a reference to the child progress bar options.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set, at least "filled", "current" and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Clip counter: `█████████████▋       312/540 clips (57%) eta 00:00:41`
    pub const TEMPLATE_CLIPS: &'static str =
        "{bar:40.blue} {pos:>}/{len} clips ({percent}%) eta {eta_precise:.blue}";
    /// Per-clip bytes: `━━━━━━━╾──── 31.02 KiB/52.80 KiB greetings/hello.mp3`
    pub const TEMPLATE_BYTES: &'static str =
        "{bar:30.green/black} {bytes:>11.green}/{total_bytes:<11.green} {msg}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to indicatif's default bar.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            if let Ok(templated) = ProgressStyle::default_bar().template(&template) {
                style = templated;
            }
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_enabled() {
        let style = StyleOptions::default();
        assert!(style.is_enabled());
        assert!(!style.main().clear);
        assert!(style.child().clear);
    }

    #[test]
    fn test_hidden_style() {
        let style = StyleOptions::hidden();
        assert!(!style.is_enabled());
        assert!(style.main().clone().to_progress_bar(10).is_hidden());
    }

    #[test]
    fn test_invalid_template_falls_back() {
        let opts = ProgressBarOpts::new(Some("{bar:".into()), None, true, false);
        let pb = opts.to_progress_bar(5);
        assert_eq!(pb.length(), Some(5));
    }
}
