//! Fetch summary functionality.
//!
//! A [`Summary`] is returned for every artifact that was fetched
//! successfully. Failures never produce a summary: they abort the run with an
//! [`Error`](crate::Error) instead.
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::artifact::{Artifact, Status, Summary};
//! use reqwest::StatusCode;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let artifact = Artifact::try_from((
//!     "https://cdn.fxn.ai/fxnc/1.0.0/Function.xcframework.zip",
//!     "ios/Function.xcframework.zip",
//! ))?;
//! let summary = Summary::new(artifact, StatusCode::OK, 2048).with_status(Status::Extracted(12));
//!
//! match summary.status() {
//!     Status::Written => println!("wrote {} bytes", summary.size()),
//!     Status::Extracted(n) => println!("unpacked {} entries", n),
//! }
//! # Ok(())
//! # }
//! ```

use super::artifact::Artifact;
use reqwest::StatusCode;

/// What happened to the artifact on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The response body was written to the destination.
    Written,
    /// The archive was unpacked next to its destination and removed.
    /// Holds the number of entries extracted.
    Extracted(usize),
}

/// Represents an [`Artifact`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Fetched artifact.
    artifact: Artifact,
    /// HTTP status code.
    statuscode: StatusCode,
    /// Bytes received.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for an artifact whose body was written.
    pub fn new(artifact: Artifact, statuscode: StatusCode, size: u64) -> Self {
        Self {
            artifact,
            statuscode,
            size,
            status: Status::Written,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the summary's HTTP status code.
    pub fn statuscode(&self) -> StatusCode {
        self.statuscode
    }

    /// Get the number of bytes received.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's artifact.
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }
}
