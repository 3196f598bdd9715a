//! Configuration structures and defaults for the fetcher.
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::fetcher::CompletionCallback;
//! use fxnc_fetch::artifact::{Status, Summary};
//!
//! let callback: CompletionCallback = Box::new(|summary: &Summary| match summary.status() {
//!     Status::Written => println!("wrote {}", summary.artifact().destination.display()),
//!     Status::Extracted(n) => println!("unpacked {} entries", n),
//! });
//! ```

use crate::artifact::Summary;
use crate::http::HttpClientConfig;
use crate::progress::StyleOptions;

use reqwest::header::HeaderMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for artifact completion events.
pub type CompletionCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the fetcher.
#[derive(Clone)]
pub struct FetcherConfig {
    /// Project root the artifact destinations are resolved against.
    ///
    /// Defaults to `.`, i.e. the working directory at fetch time.
    pub directory: PathBuf,
    /// Number of retries per request, `0` for a single attempt.
    pub retries: u32,
    /// Total timeout per request.
    pub timeout: Option<Duration>,
    /// Optional proxy.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
    /// Callback for when each artifact completes.
    pub on_complete: Option<Arc<CompletionCallback>>,
}

impl FetcherConfig {
    /// The HTTP client configuration derived from this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            retries: self.retries,
            timeout: self.timeout,
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
        }
    }
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("directory", &self.directory)
            .field("retries", &self.retries)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .field("style_options", &self.style_options)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            retries: 0,
            timeout: None,
            proxy: None,
            headers: None,
            style_options: StyleOptions::default(),
            on_complete: None,
        }
    }
}
