//! Progress module containing progress bar functionality.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Progress bar display management
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::fetcher::FetcherBuilder;
//! use fxnc_fetch::progress::{ProgressBarOpts, StyleOptions};
//!
//! let fetcher = FetcherBuilder::new()
//!     .style_options(StyleOptions::new(
//!         ProgressBarOpts::hidden(),
//!         ProgressBarOpts::with_pip_style(),
//!     ))
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
