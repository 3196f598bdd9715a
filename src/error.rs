//! Error handling for fxnc-fetch.
//!
//! Every failure a fetch can run into is represented by [`Error`]. None of
//! them are recovered: the first error aborts the remaining artifacts and is
//! handed back to the caller.

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen while fetching artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// The URL template produced something that is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The version string cannot be substituted into the URL template.
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// I/O Error.
    ///
    /// Raised while creating directories, writing artifacts or deleting an
    /// archive after extraction.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library, e.g. while streaming a response body.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Transport error raised through the middleware stack.
    #[error("HTTP request failed")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a 4xx or 5xx status.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// An archive entry could not be read or would land outside the
    /// extraction directory.
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The zip reader rejected the archive or one of its entries, e.g. an
    /// unsupported compression method.
    #[error("Invalid zip archive")]
    Zip {
        #[from]
        source: zip::result::ZipError,
    },
}

impl Error {
    /// Shorthand for an [`Error::Archive`] without an underlying cause.
    pub(crate) fn archive(message: impl Into<String>) -> Self {
        Error::Archive {
            message: message.into(),
            cause: None,
        }
    }
}

/// Result type alias for fxnc-fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
