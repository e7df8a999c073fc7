//! Directory walker for file discovery.
//!
//! Recursively enumerates the regular files under a root path using
//! [`walkdir`], pruning any subtree whose name matches the version-control
//! metadata directory (`.git`) at any depth. Traversal is single-threaded
//! and depth-first; no ordering is guaranteed beyond what the filesystem
//! yields, so consumers that need stable output sort later.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let files = hashdupe::walker::walk(Path::new("/home/user/Downloads"))?;
//! for file in &files {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), hashdupe::walker::ScanError>(())
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Directory name excluded from traversal, together with everything under it.
const VCS_METADATA_DIR: &str = ".git";

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The specified root path was not found.
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The specified root path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An I/O error occurred while reading a directory entry.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Recursively collect every regular file under `root`.
///
/// Symbolic links are not followed. Any path component equal to `.git`
/// contributes zero entries, so repository metadata never shows up as a
/// duplicate candidate.
///
/// # Errors
///
/// Fails fast with [`ScanError::NotFound`] or [`ScanError::NotADirectory`]
/// for an unusable root, and surfaces per-entry I/O failures as
/// [`ScanError::Io`]. Errors terminate the walk; this is a local utility
/// and partial results would be misleading.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let entries = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| name != VCS_METADATA_DIR)
        });

    for entry in entries {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            match err.into_io_error() {
                Some(source) => ScanError::Io { path, source },
                None => ScanError::Io {
                    path,
                    source: std::io::Error::other("filesystem loop detected"),
                },
            }
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    log::debug!("Discovered {} file(s) under {}", files.len(), root.display());
    Ok(files)
}
