//! Data structures produced while preparing a page tree for bundling.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Flat record describing a directory that contains an index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexedPageRecord {
    /// Name of the directory itself.
    pub folder_name: String,
    /// Path of the directory's parent.
    pub parent_folder_path: PathBuf,
    /// Full path of the directory.
    pub folder_full_path: PathBuf,
    /// Full path of the index page inside the directory.
    pub index_html_path: PathBuf,
}

/// Node in the nested map of directories that lead to an index page.
#[derive(Debug, Clone, Serialize)]
pub struct PageTreeNode {
    /// Path of the directory's parent.
    pub parent: PathBuf,
    /// Path of the index page, present only when this directory holds one directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,
    /// Qualifying subdirectories keyed by folder name.
    pub children: BTreeMap<String, PageTreeNode>,
}

/// Result of merging candidate asset paths into a manifest document.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The full manifest content after merging, one element per line.
    pub lines: Vec<String>,
    /// Number of candidate paths appended to the asset list.
    pub added: usize,
    /// Number of candidate paths that were already declared.
    pub already_present: usize,
}

/// Summary of an end-to-end manifest synchronisation run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Number of asset paths appended to the manifest.
    pub added: usize,
    /// Number of asset paths that were already declared.
    pub already_present: usize,
    /// Number of candidate paths discovered under the page tree.
    pub candidates: usize,
    /// Whether the manifest file was rewritten.
    pub changed: bool,
}
