//! fxnc-fetch places the prebuilt Function core libraries (fxnc) into a
//! plugin project tree.
//!
//! Every supported platform has one artifact on the CDN. The artifacts are
//! fetched one after the other; the iOS framework is shipped as a zip and
//! is unpacked next to where it was written.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fxnc_fetch::{artifacts, FetcherBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let artifacts = artifacts("0.0.35")?;
//! let fetcher = FetcherBuilder::new().build();
//! fetcher.fetch_all(&artifacts).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`artifact`] - The artifact manifest and fetch summaries
//! - [`archive`] - In-place zip extraction
//! - [`fetcher`] - The `Fetcher` and `FetcherBuilder`
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display management

pub mod archive;
pub mod artifact;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;

pub use artifact::{artifacts, Artifact, Status, Summary};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
