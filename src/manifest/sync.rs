//! End-to-end synchronisation of the manifest against a scanned page tree.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::merge::merge_asset_paths;
use crate::models::SyncReport;
use crate::scan::{collect_files_relative, is_junk_candidate};

/// Errors that can occur while synchronising the manifest file.
#[derive(Debug)]
pub enum ManifestSyncError {
    /// The manifest path does not resolve to a readable file.
    ManifestNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Failed to read the manifest from disk.
    Read {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to write the updated manifest back to disk.
    Write {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for ManifestSyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManifestNotFound { path } => {
                write!(f, "manifest {} not found", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ManifestSyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ManifestNotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

/// Walk `pages_dir` and merge every discovered file into the manifest asset list.
///
/// Candidate paths are computed relative to `project_root` with forward slashes,
/// filtered of hidden files and OS metadata, and handed to the pure merge. The
/// manifest is rewritten in a single shot only when entries were actually added,
/// so a failed write leaves the original file untouched and an up-to-date
/// manifest is never rewritten at all. A missing `pages_dir` yields an empty
/// candidate set rather than an error.
///
/// The manifest is expected to use `\n` line endings; a trailing newline is
/// ensured on write.
pub fn sync_manifest_assets(
    project_root: &Path,
    manifest_path: &Path,
    pages_dir: &Path,
) -> Result<SyncReport, ManifestSyncError> {
    if !manifest_path.is_file() {
        return Err(ManifestSyncError::ManifestNotFound {
            path: manifest_path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(manifest_path).map_err(|err| ManifestSyncError::Read {
        path: manifest_path.to_path_buf(),
        source: err,
    })?;

    let candidates: BTreeSet<String> = collect_files_relative(pages_dir, project_root)
        .into_iter()
        .filter(|path| !is_junk_candidate(path))
        .collect();

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let outcome = merge_asset_paths(&lines, &candidates);

    let changed = outcome.added > 0;
    if changed {
        let mut updated = outcome.lines.join("\n");
        updated.push('\n');
        fs::write(manifest_path, updated).map_err(|err| ManifestSyncError::Write {
            path: manifest_path.to_path_buf(),
            source: err,
        })?;
    }

    Ok(SyncReport {
        added: outcome.added,
        already_present: outcome.already_present,
        candidates: candidates.len(),
        changed,
    })
}
