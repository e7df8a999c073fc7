//! Duplicate finder: hash every discovered file and group paths by digest.
//!
//! # Overview
//!
//! The finder drives the one-way pipeline walker -> finder -> reporter. Each
//! file the walker yields is read fully into memory and digested with the
//! selected [`HashAlgorithm`]; paths accumulate under their digest in
//! discovery order. Whole-file reads are a documented limitation of this
//! tool's target scale, not something to silently stream around.
//!
//! # Example
//!
//! ```no_run
//! use hashdupe::finder::find_duplicates;
//! use hashdupe::hash::{HashAlgorithm, PearsonTable, DEFAULT_TABLE_SEED};
//! use std::path::Path;
//!
//! let table = PearsonTable::generate(DEFAULT_TABLE_SEED);
//! let (groups, summary) =
//!     find_duplicates(Path::new("."), HashAlgorithm::Md5, &table)?;
//! println!("{} duplicate group(s)", summary.duplicate_groups);
//! # Ok::<(), hashdupe::finder::FinderError>(())
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::hash::{Digest, HashAlgorithm, HashError, PearsonTable};
use crate::walker::{self, ScanError};

/// Errors that can occur while finding duplicates.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// Directory traversal failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A discovered file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file's content could not be hashed (e.g. an empty file under the
    /// 64-bit Pearson hash).
    #[error("Failed to hash {}: {source}", .path.display())]
    Hash {
        /// Path of the offending file
        path: PathBuf,
        /// The underlying hash error
        #[source]
        source: HashError,
    },
}

/// Statistics from a finder pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total files read and hashed
    pub files_hashed: usize,
    /// Number of digests shared by 2+ files
    pub duplicate_groups: usize,
}

/// Hash every file under `root` and group paths by digest.
///
/// Paths are appended to their digest's group in discovery order; the first
/// element of each group is the representative the reporter's extension
/// filter checks. The Pearson `table` is generated once by the caller and
/// passed through to every hash call.
///
/// # Errors
///
/// Any traversal, read, or hash failure aborts the pass; partial results
/// are never returned.
pub fn find_duplicates(
    root: &Path,
    algorithm: HashAlgorithm,
    table: &PearsonTable,
) -> Result<(HashMap<Digest, Vec<PathBuf>>, ScanSummary), FinderError> {
    let files = walker::walk(root)?;

    let mut groups: HashMap<Digest, Vec<PathBuf>> = HashMap::new();
    let mut summary = ScanSummary::default();

    for path in files {
        let message = fs::read(&path).map_err(|source| FinderError::Read {
            path: path.clone(),
            source,
        })?;
        let digest = algorithm
            .digest(&message, table)
            .map_err(|source| FinderError::Hash {
                path: path.clone(),
                source,
            })?;
        log::trace!("{digest}  {}", path.display());
        groups.entry(digest).or_default().push(path);
        summary.files_hashed += 1;
    }

    summary.duplicate_groups = groups.values().filter(|paths| paths.len() > 1).count();
    log::debug!(
        "Hashed {} file(s) with {algorithm}: {} digest(s), {} duplicate group(s)",
        summary.files_hashed,
        groups.len(),
        summary.duplicate_groups
    );

    Ok((groups, summary))
}
