//! Core fetch logic.
//!
//! [`Fetcher::fetch_all`] walks the artifacts in order and awaits each one
//! before starting the next. The first failure is returned immediately and
//! the remaining artifacts are left untouched.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fxnc_fetch::artifact::artifacts;
//! use fxnc_fetch::fetcher::FetcherBuilder;
//!
//! # async fn example() -> fxnc_fetch::Result<()> {
//! let fetcher = FetcherBuilder::new().build();
//! let summaries = fetcher.fetch_all(&artifacts("1.0.0")?).await?;
//! for summary in summaries {
//!     println!("{} -> {:?}", summary.artifact().url, summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use crate::archive;
use crate::artifact::{Artifact, Status, Summary};
use crate::error::{Error, Result};
use crate::http::create_http_client;
use crate::progress::ProgressDisplay;

use futures::stream::StreamExt;
use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{fs, io::AsyncWriteExt, task};
use tracing::{debug, info};

/// Fetches artifacts and places them in the project tree.
///
/// A fetcher is created via its builder:
///
/// ```rust
/// use fxnc_fetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the project root destinations are resolved against.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the number of retries per request.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Where `artifact` lands on disk.
    pub fn output_path(&self, artifact: &Artifact) -> PathBuf {
        self.config.directory.join(&artifact.destination)
    }

    /// Fetches a single artifact.
    pub async fn fetch(&self, artifact: &Artifact) -> Result<Summary> {
        let client = create_http_client(self.config.http_client_config())?;
        let progress = ProgressDisplay::new(self.config.style_options.clone(), 1);
        let result = self.fetch_one(&client, artifact, &progress).await;
        progress.finish();
        result
    }

    /// Fetches every artifact in order, stopping at the first error.
    pub async fn fetch_all(&self, artifacts: &[Artifact]) -> Result<Vec<Summary>> {
        let client = create_http_client(self.config.http_client_config())?;
        let progress = ProgressDisplay::new(self.config.style_options.clone(), artifacts.len());

        let mut summaries = Vec::with_capacity(artifacts.len());
        let mut outcome = Ok(());
        for artifact in artifacts {
            match self.fetch_one(&client, artifact, &progress).await {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    outcome = Err(e);
                    break;
                }
            }
        }

        progress.finish();
        outcome.map(|_| summaries)
    }

    /// Download one artifact, write it, and unpack it if it is an archive.
    async fn fetch_one(
        &self,
        client: &ClientWithMiddleware,
        artifact: &Artifact,
        progress: &ProgressDisplay,
    ) -> Result<Summary> {
        let output = self.output_path(artifact);

        // Prepare the destination directory.
        if let Some(output_dir) = output.parent() {
            debug!("Creating destination directory {:?}", output_dir);
            fs::create_dir_all(output_dir).await?;
        }

        // Request the file.
        debug!("Fetching {}", &artifact.url);
        let res = client.get(artifact.url.clone()).send().await?;

        // Check the status for errors.
        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::HttpStatus {
                url: artifact.url.to_string(),
                status,
            });
        }

        let pb = progress.create_child_progress(res.content_length());

        debug!("Creating destination file {:?}", &output);
        let mut file = fs::File::create(&output).await?;

        // Write the body chunk by chunk.
        let mut size: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            let chunk_size = chunk.len() as u64;
            size += chunk_size;
            pb.inc(chunk_size);
            file.write_all_buf(&mut chunk).await?;
        }
        file.flush().await?;
        drop(file);

        progress.finish_child(pb);
        info!("Wrote {} to path: {}", artifact.url, output.display());

        let mut summary = Summary::new(artifact.clone(), status, size);

        if artifact.is_archive() {
            let entries = unpack(&output).await?;
            info!("Extracted {}", output.display());
            summary = summary.with_status(Status::Extracted(entries));
        }

        progress.increment_main();

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        Ok(summary)
    }
}

/// Unpack an archive next to itself off the async runtime.
async fn unpack(archive_path: &Path) -> Result<usize> {
    let archive_path = archive_path.to_path_buf();
    task::spawn_blocking(move || archive::unpack_in_place(&archive_path))
        .await
        .map_err(|e| Error::Archive {
            message: "Extraction task failed".into(),
            cause: Some(Box::new(e)),
        })?
}
