#![allow(dead_code)]

use flate2::{write::DeflateEncoder, Compression, Crc};
use fxnc_fetch::progress::{ProgressBarOpts, StyleOptions};
use fxnc_fetch::{Artifact, FetcherBuilder, HttpClientConfig};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_VERSION: &str = "1.0.0";
pub const TEST_USER_AGENT: &str = "fxnc-fetch-test-agent";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

// === Mock Server Helpers ===

/// Starts a mock CDN that serves `body` under `route`.
pub async fn serve(server: &MockServer, route: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Answers `route` with the given status and an empty body.
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Creates an artifact pointing at `route` on the mock server.
pub fn create_test_artifact(server: &MockServer, route: &str, destination: &str) -> Artifact {
    let url = Url::parse(&format!("{}{}", server.uri(), route)).expect("Invalid mock URL");
    Artifact::new(&url, destination)
}

// === Fetcher Builder Helpers ===

/// Creates a quiet fetcher builder writing into `dir`.
pub fn create_test_fetcher_builder(dir: &Path) -> FetcherBuilder {
    FetcherBuilder::hidden().directory(dir.to_path_buf())
}

// === HTTP Configuration Helpers ===

/// Creates test headers with a custom user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates a test HTTP client configuration with custom retries
pub fn create_test_http_config_with_retries(retries: u32) -> HttpClientConfig {
    HttpClientConfig {
        retries,
        headers: Some(create_test_headers()),
        ..HttpClientConfig::default()
    }
}

// === Progress Bar Helpers ===

/// Creates default test progress bar options
pub fn create_test_progress_opts() -> ProgressBarOpts {
    ProgressBarOpts::new(None, None, true, false)
}

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false,
    )
}

/// Creates default test style options
pub fn create_test_style_options() -> StyleOptions {
    StyleOptions::new(create_test_progress_opts(), ProgressBarOpts::with_pip_style())
}

/// Creates disabled style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
}

// === Zip Fixtures ===

/// One entry of a zip fixture.
pub struct ZipFixtureEntry {
    pub name: String,
    pub data: Vec<u8>,
    pub method: u16,
    pub unix_mode: Option<u32>,
}

impl ZipFixtureEntry {
    /// A regular file stored without compression.
    pub fn stored(name: &str, data: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            data: data.to_vec(),
            method: 0,
            unix_mode: Some(0o100644),
        }
    }

    /// A regular file compressed with deflate.
    pub fn deflated(name: &str, data: &[u8]) -> Self {
        Self {
            method: 8,
            ..Self::stored(name, data)
        }
    }

    /// A directory entry. `name` must end with `/`.
    pub fn dir(name: &str) -> Self {
        Self {
            unix_mode: Some(0o040755),
            ..Self::stored(name, b"")
        }
    }

    /// A unix symlink pointing at `target`.
    pub fn symlink(name: &str, target: &str) -> Self {
        Self {
            unix_mode: Some(0o120777),
            ..Self::stored(name, target.as_bytes())
        }
    }

    /// Overrides the compression method recorded for the entry.
    pub fn with_method(mut self, method: u16) -> Self {
        self.method = method;
        self
    }
}

/// Builds an in-memory zip archive from `entries`.
pub fn build_zip(entries: &[ZipFixtureEntry]) -> Vec<u8> {
    build_zip_with(entries, |_| {})
}

/// Builds a zip archive and lets `tamper` rewrite each entry's payload after
/// the checksum has been computed.
pub fn build_zip_with(entries: &[ZipFixtureEntry], tamper: impl Fn(&mut Vec<u8>)) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for entry in entries {
        let mut crc = Crc::new();
        crc.update(&entry.data);

        let mut payload = match entry.method {
            8 => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&entry.data).expect("deflate write");
                encoder.finish().expect("deflate finish")
            }
            _ => entry.data.clone(),
        };
        tamper(&mut payload);

        let offset = out.len() as u32;
        let name = entry.name.as_bytes();

        // Local file header
        out.extend_from_slice(b"PK\x03\x04");
        out.extend_from_slice(&20u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&entry.method.to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&crc.sum().to_le_bytes());
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(&payload);

        // Central directory header
        let (made_by, external) = match entry.unix_mode {
            Some(mode) => ((3u16 << 8) | 20, mode << 16),
            None => (20u16, 0),
        };
        central.extend_from_slice(b"PK\x01\x02");
        central.extend_from_slice(&made_by.to_le_bytes());
        central.extend_from_slice(&20u16.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&entry.method.to_le_bytes());
        central.extend_from_slice(&[0; 4]);
        central.extend_from_slice(&crc.sum().to_le_bytes());
        central.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        central.extend_from_slice(&(entry.data.len() as u32).to_le_bytes());
        central.extend_from_slice(&(name.len() as u16).to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes());
        central.extend_from_slice(&external.to_le_bytes());
        central.extend_from_slice(&offset.to_le_bytes());
        central.extend_from_slice(name);
    }

    let central_offset = out.len() as u32;
    out.extend_from_slice(&central);

    // End of central directory record
    out.extend_from_slice(b"PK\x05\x06");
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    out.extend_from_slice(&(central.len() as u32).to_le_bytes());
    out.extend_from_slice(&central_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out
}

// === Assertion Helpers ===

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that nothing exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(
        fs::symlink_metadata(path).is_err(),
        "Nothing should exist at path: {:?}",
        path
    );
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}

/// Asserts that style options are enabled
pub fn assert_style_options_enabled(style: &StyleOptions) {
    assert!(style.is_enabled(), "Style options should be enabled");
}

/// Asserts that style options are disabled
pub fn assert_style_options_disabled(style: &StyleOptions) {
    assert!(!style.is_enabled(), "Style options should be disabled");
}
