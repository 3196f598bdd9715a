//! Progress bar display management.
//!
//! [`ProgressDisplay`] owns the main bar (artifacts done out of the total)
//! and hands out one child bar per artifact while its body downloads.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates the main and child bars.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for `total` artifacts.
    pub fn new(style_options: StyleOptions, total: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(style_options.main().clone().to_progress_bar(total as u64));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Get the main progress bar.
    pub fn main(&self) -> &ProgressBar {
        &self.main
    }

    /// Create a child progress bar for one artifact body.
    ///
    /// `size` is the announced content length, if any.
    pub fn create_child_progress(&self, size: Option<u64>) -> ProgressBar {
        self.multi.add(
            self.style_options
                .child()
                .clone()
                .to_progress_bar(size.unwrap_or(0)),
        )
    }

    /// Increment the main progress bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the progress display, clearing or keeping the main bar based on configuration.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
