//! The static table of Function native libraries.
//!
//! Each entry names the file published on the CDN for one platform and
//! architecture, and where it belongs in a multi-platform project layout.
//! The version is the only parameter: it is substituted into
//! `https://cdn.fxn.ai/fxnc/<version>/<filename>`.

use super::artifact::Artifact;
use crate::error::{Error, Result};

use reqwest::Url;
use std::fmt;
use std::path::PathBuf;

/// Base URL of the CDN serving the libraries.
pub const CDN_BASE_URL: &str = "https://cdn.fxn.ai";

/// Target platform of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Linux,
    Windows,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
        };
        f.write_str(name)
    }
}

/// One row of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Platform the library is built for.
    pub platform: Platform,
    /// File name on the CDN.
    pub filename: &'static str,
    /// Destination path components, relative to the project root.
    pub destination: &'static [&'static str],
}

impl ArtifactSpec {
    /// Destination as a relative path.
    pub fn destination(&self) -> PathBuf {
        self.destination.iter().collect()
    }

    /// Build the [`Artifact`] for `version` served from `base`.
    pub fn artifact(&self, base: &str, version: &str) -> Result<Artifact> {
        let url = format!(
            "{}/fxnc/{}/{}",
            base.trim_end_matches('/'),
            version,
            self.filename
        );
        let url = Url::parse(&url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;
        Ok(Artifact::new(&url, self.destination()))
    }
}

/// Every library, in fetch order.
pub const MANIFEST: &[ArtifactSpec] = &[
    ArtifactSpec {
        platform: Platform::Android,
        filename: "libFunction-android-armeabi-v7a.so",
        destination: &["android", "src", "main", "jniLibs", "armeabi-v7a", "libFunction.so"],
    },
    ArtifactSpec {
        platform: Platform::Android,
        filename: "libFunction-android-arm64-v8a.so",
        destination: &["android", "src", "main", "jniLibs", "arm64-v8a", "libFunction.so"],
    },
    ArtifactSpec {
        platform: Platform::Ios,
        filename: "Function.xcframework.zip",
        destination: &["ios", "Function.xcframework.zip"],
    },
    ArtifactSpec {
        platform: Platform::Macos,
        filename: "Function-macos-arm64.dylib",
        destination: &["macos", "Function.dylib"],
    },
    ArtifactSpec {
        platform: Platform::Linux,
        filename: "libFunction-linux-x86_64.so",
        destination: &["linux", "x86_64", "libFunction.so"],
    },
    ArtifactSpec {
        platform: Platform::Linux,
        filename: "libFunction-linux-arm64.so",
        destination: &["linux", "arm64", "libFunction.so"],
    },
    ArtifactSpec {
        platform: Platform::Windows,
        filename: "Function-win-x86_64.dll",
        destination: &["windows", "x86_64", "Function.dll"],
    },
    ArtifactSpec {
        platform: Platform::Windows,
        filename: "Function-win-arm64.dll",
        destination: &["windows", "arm64", "Function.dll"],
    },
];

/// Check that `version` can be dropped into a URL path segment as-is.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(Error::InvalidVersion("the version is empty".into()));
    }
    if let Some(c) = version
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
    {
        return Err(Error::InvalidVersion(format!(
            "\"{}\" contains the forbidden character {:?}",
            version, c
        )));
    }
    if version == "." || version == ".." {
        return Err(Error::InvalidVersion(format!(
            "\"{}\" is not a version",
            version
        )));
    }
    Ok(())
}

/// The artifacts of `version`, served from [`CDN_BASE_URL`].
pub fn artifacts(version: &str) -> Result<Vec<Artifact>> {
    artifacts_with_base(CDN_BASE_URL, version)
}

/// The artifacts of `version`, served from `base` instead of the public CDN.
pub fn artifacts_with_base(base: &str, version: &str) -> Result<Vec<Artifact>> {
    validate_version(version)?;
    MANIFEST
        .iter()
        .map(|spec| spec.artifact(base, version))
        .collect()
}
