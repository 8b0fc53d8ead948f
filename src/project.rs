//! Project layout description shared by the scanning and manifest tooling.

use std::path::{Path, PathBuf};

/// Filesystem layout of a project holding an exported page tree and a build manifest.
///
/// Every path-producing method takes the project root explicitly so that callers never
/// depend on the process working directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Directory containing the exported page tree, relative to the project root.
    pub pages_dir: String,
    /// Build manifest file name, relative to the project root.
    pub manifest_file: String,
    /// File name that marks a directory as an index page.
    pub index_html_file: String,
    /// Output file for the nested folder map JSON.
    pub page_map_json: String,
    /// Output file for the plain listing of HTML files.
    pub html_list_file: String,
}

impl ProjectLayout {
    /// Root of the exported page tree.
    pub fn pages_dir_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.pages_dir)
    }

    /// Path of the build manifest file.
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.manifest_file)
    }

    /// Path the folder map JSON is written to.
    pub fn page_map_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.page_map_json)
    }

    /// Path the HTML file listing is written to.
    pub fn html_list_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.html_list_file)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        crate::config::ProjectConfig::default().into_layout()
    }
}
