//! Builder pattern implementation for creating [`Fetcher`] instances.
//!
//! # Examples
//!
//! ```rust
//! use fxnc_fetch::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let fetcher = FetcherBuilder::hidden()
//!     .directory(PathBuf::from("./my-plugin"))
//!     .retries(3)
//!     .timeout(Duration::from_secs(600))
//!     .build();
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::artifact::Summary;
use crate::progress::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// use fxnc_fetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().directory("plugin".into()).build();
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Sets the project root the artifact destinations are resolved against.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the number of retries for transient failures.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set a total timeout per request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback for when each artifact has been written, and extracted if it is an archive.
    ///
    /// ```rust
    /// use fxnc_fetch::fetcher::FetcherBuilder;
    ///
    /// let fetcher = FetcherBuilder::new()
    ///     .on_complete(|summary| {
    ///         println!("{} -> {:?}", summary.artifact().url, summary.status());
    ///     })
    ///     .build();
    /// ```
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header.
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use fxnc_fetch::fetcher::FetcherBuilder;
    ///
    /// let auth = HeaderValue::from_static("Bearer 0123456789");
    ///
    /// let fetcher = FetcherBuilder::new()
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
