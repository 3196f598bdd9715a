//! Fetcher module: orchestrates downloading and unpacking artifacts.
//!
//! - [`builder`] - [`FetcherBuilder`] for configuring a fetcher
//! - [`config`] - Configuration structures and callback types
//! - [`fetcher`] - The [`Fetcher`] itself

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::{CompletionCallback, FetcherConfig};
pub use fetcher::Fetcher;
