//! Zip extraction.
//!
//! Entries are read with the `zip` crate. Directories and regular files are
//! written first and symlinks last, so no entry is ever written through a
//! link created by the same archive. Before anything touches the disk its
//! parent is resolved and must lie inside the extraction directory.

use crate::error::{Error, Result};

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

/// Whether `path` names a zip archive, judged by its extension.
///
/// ```rust
/// use fxnc_fetch::archive::is_archive;
/// use std::path::Path;
///
/// assert!(is_archive(Path::new("ios/Function.xcframework.zip")));
/// assert!(!is_archive(Path::new("macos/Function.dylib")));
/// ```
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

struct PendingLink {
    relative: PathBuf,
    output: PathBuf,
    target: String,
}

/// Extract every entry of `archive` under `target`, returning the paths written.
pub fn extract(archive: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target)?;
    let root = fs::canonicalize(target)?;

    let file = File::open(archive)?;
    let mut zip_archive = zip::ZipArchive::new(BufReader::new(file))?;
    debug!("Read {} entries from {:?}", zip_archive.len(), archive);

    let mut written = Vec::with_capacity(zip_archive.len());
    let mut links = Vec::new();

    for i in 0..zip_archive.len() {
        let mut entry = zip_archive.by_index(i)?;
        let name = entry.name().to_string();
        let relative = entry
            .enclosed_name()
            .map(|path| path.to_path_buf())
            .ok_or_else(|| {
                Error::archive(format!("Entry '{}' escapes the extraction directory", name))
            })?;
        let output = root.join(&relative);
        let unix_mode = entry.unix_mode();

        if entry.is_dir() {
            ensure_enclosed(&root, &output)?;
            fs::create_dir_all(&output)?;
            written.push(output);
            continue;
        }

        let mut data = Vec::new();
        entry.read_to_end(&mut data).map_err(|e| Error::Archive {
            message: format!("Failed to read entry '{}'", name),
            cause: Some(Box::new(e)),
        })?;

        if unix_mode.is_some_and(|mode| mode & S_IFMT == S_IFLNK) {
            links.push(PendingLink {
                relative,
                output,
                target: String::from_utf8_lossy(&data).into_owned(),
            });
            continue;
        }

        let parent = output.parent().unwrap_or(root.as_path());
        ensure_enclosed(&root, parent)?;
        fs::create_dir_all(parent)?;
        remove_link(&output)?;
        fs::write(&output, &data)?;
        debug!("Entry {} extracted to {:?} ({} bytes)", i, output, data.len());
        #[cfg(unix)]
        set_unix_mode(&output, unix_mode);
        written.push(output);
    }

    for link in &links {
        if !link_is_enclosed(&link.relative, Path::new(&link.target)) {
            return Err(Error::archive(format!(
                "Symlink '{}' points outside the extraction directory",
                link.relative.display()
            )));
        }
        let parent = link.output.parent().unwrap_or(root.as_path());
        ensure_enclosed(&root, parent)?;
        fs::create_dir_all(parent)?;
        write_symlink(&link.output, &link.target)?;
        written.push(link.output.clone());
    }

    // Links may chain through each other, so they are resolved once all exist.
    #[cfg(unix)]
    for link in &links {
        verify_link(&root, &link.output)?;
    }

    Ok(written)
}

/// Unpack `archive` into its parent directory, then delete it.
///
/// Returns the number of entries extracted. A failed extraction keeps the
/// archive.
pub fn unpack_in_place(archive: &Path) -> Result<usize> {
    let target = match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let extracted = extract(archive, target)?.len();

    debug!("Removing archive {:?}", archive);
    fs::remove_file(archive)?;
    Ok(extracted)
}

/// Fail unless the deepest existing ancestor of `path` resolves inside `root`.
fn ensure_enclosed(root: &Path, path: &Path) -> Result<()> {
    let mut current = Some(path);
    while let Some(candidate) = current {
        if candidate.exists() {
            let resolved = fs::canonicalize(candidate)?;
            if resolved.starts_with(root) {
                return Ok(());
            }
            break;
        }
        current = candidate.parent();
    }
    Err(Error::archive(format!(
        "{} resolves outside the extraction directory",
        path.display()
    )))
}

/// Drop a symlink left at `path` by an earlier extraction.
fn remove_link(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink()) {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Whether a link stored at `relative` pointing to `link_target` stays inside
/// the extraction directory, judged on the paths alone.
fn link_is_enclosed(relative: &Path, link_target: &Path) -> bool {
    let mut depth = relative.components().count().saturating_sub(1) as isize;
    for component in link_target.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

fn write_symlink(output: &Path, link_target: &str) -> Result<()> {
    match fs::symlink_metadata(output) {
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(output)?,
        Ok(_) => {
            return Err(Error::archive(format!(
                "Symlink {} would replace an existing entry",
                output.display()
            )))
        }
        Err(_) => {}
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink(link_target, output)?;

    // Without unix symlinks the target is kept as the file content.
    #[cfg(not(unix))]
    fs::write(output, link_target.as_bytes())?;

    Ok(())
}

#[cfg(unix)]
fn verify_link(root: &Path, link: &Path) -> Result<()> {
    match fs::canonicalize(link) {
        Ok(resolved) if resolved.starts_with(root) => Ok(()),
        _ => {
            fs::remove_file(link)?;
            Err(Error::archive(format!(
                "Symlink {} does not resolve inside the extraction directory",
                link.display()
            )))
        }
    }
}

#[cfg(unix)]
fn set_unix_mode(path: &Path, unix_mode: Option<u32>) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = unix_mode {
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777)) {
            tracing::warn!("Failed to set permissions for {}: {}", path.display(), e);
        }
    }
}
