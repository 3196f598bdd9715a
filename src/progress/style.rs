//! Progress bar styles.
//!
//! The main bar counts finished artifacts; the child bar tracks the bytes of
//! the artifact being written.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

const ARTIFACTS_TEMPLATE: &str = "{bar:40.blue} {pos}/{len} artifacts {elapsed:.dim}";
const BYTES_TEMPLATE: &str =
    "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red}";
const BLOCK_CHARS: &str = "█▉▊▋▌▍▎▏  ";
const LINE_CHARS: &str = "━╾╴─";

/// Styles of the artifact bar and the byte bar.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    main: ProgressBarOpts,
    child: ProgressBarOpts,
}

impl Default for StyleOptions {
    /// The artifact bar stays once the run is over, byte bars are cleared.
    fn default() -> Self {
        Self {
            main: ProgressBarOpts {
                template: Some(ARTIFACTS_TEMPLATE.into()),
                progress_chars: Some(BLOCK_CHARS.into()),
                enabled: true,
                clear: false,
            },
            child: ProgressBarOpts::with_pip_style(),
        }
    }
}

impl StyleOptions {
    /// Pair an artifact bar style with a byte bar style.
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Whether anything is drawn at all.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Look of a single bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    template: Option<String>,
    progress_chars: Option<String>,
    pub(crate) enabled: bool,
    pub(crate) clear: bool,
}

impl ProgressBarOpts {
    /// A bar with an indicatif template and progress characters; `None`
    /// keeps indicatif's defaults.
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

    /// Byte counter and transfer rate, cleared when done.
    pub fn with_pip_style() -> Self {
        Self {
            template: Some(BYTES_TEMPLATE.into()),
            progress_chars: Some(LINE_CHARS.into()),
            enabled: true,
            clear: true,
        }
    }

    /// A bar that is never drawn.
    pub fn hidden() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: false,
            clear: true,
        }
    }

    /// Build the bar for `len` units. Invalid templates fall back to the
    /// plain indicatif bar.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            match ProgressStyle::default_bar().template(&template) {
                Ok(templated) => style = templated,
                Err(e) => warn!("Ignoring invalid progress template {:?}: {}", template, e),
            }
        }
        if let Some(chars) = self.progress_chars {
            style = style.progress_chars(&chars);
        }
        ProgressBar::new(len).with_style(style)
    }
}
