//! A single artifact to fetch.
//!
//! An [`Artifact`] pairs the URL of a file on the CDN with the path it must
//! land at inside the host project. Destinations are relative and are
//! resolved against the fetcher's directory at fetch time.
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::artifact::Artifact;
//! use std::path::Path;
//!
//! let artifact = Artifact::try_from((
//!     "https://cdn.fxn.ai/fxnc/1.0.0/Function-macos-arm64.dylib",
//!     "macos/Function.dylib",
//! ))?;
//! assert_eq!(artifact.filename(), Some("Function-macos-arm64.dylib"));
//! assert_eq!(artifact.destination, Path::new("macos/Function.dylib"));
//! assert!(!artifact.is_archive());
//! # Ok::<(), fxnc_fetch::Error>(())
//! ```

use crate::archive;
use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::PathBuf;

/// Represents a file to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// URL of the file on the CDN.
    pub url: Url,
    /// Path of the file inside the host project.
    pub destination: PathBuf,
}

impl Artifact {
    /// Creates a new [`Artifact`].
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
        }
    }

    /// Name of the file on the CDN, i.e. the last segment of the URL path.
    pub fn filename(&self) -> Option<&str> {
        self.url
            .path_segments()?
            .next_back()
            .filter(|segment| !segment.is_empty())
    }

    /// Whether the destination is an archive that gets unpacked after download.
    pub fn is_archive(&self) -> bool {
        archive::is_archive(&self.destination)
    }
}

impl TryFrom<(&str, &str)> for Artifact {
    type Error = crate::error::Error;

    fn try_from((url, destination): (&str, &str)) -> Result<Self, Self::Error> {
        let url = Url::parse(url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Artifact::new(&url, destination)),
            scheme => Err(Error::InvalidUrl(format!(
                "The url \"{}\" uses the unsupported scheme \"{}\"",
                url, scheme
            ))),
        }
    }
}
