//! Artifact module: what gets fetched and where it goes.
//!
//! - [`artifact`] - The [`Artifact`] struct pairing a CDN URL with a destination
//! - [`manifest`] - The static table of libraries, keyed by version
//! - [`summary`] - Outcome of a successful fetch
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::artifact::artifacts;
//!
//! let artifacts = artifacts("1.0.0")?;
//! assert_eq!(artifacts.len(), 8);
//! # Ok::<(), fxnc_fetch::Error>(())
//! ```

pub mod artifact;
pub mod manifest;
pub mod summary;

pub use artifact::Artifact;
pub use manifest::{artifacts, artifacts_with_base, ArtifactSpec, Platform, CDN_BASE_URL, MANIFEST};
pub use summary::{Status, Summary};
