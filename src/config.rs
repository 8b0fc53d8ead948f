//! Project configuration loader for describing the page tree and manifest layout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::ProjectLayout;

const DEFAULT_CONFIG_FILE: &str = "bundleprep.config.json";

/// Discoverable project configuration describing where the page tree and manifest live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
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

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            pages_dir: "assets/html".into(),
            manifest_file: "pubspec.yaml".into(),
            index_html_file: "index.html".into(),
            page_map_json: "folder_map.json".into(),
            html_list_file: "html_files_list.txt".into(),
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to default
    /// values so downstream callers can continue operating with sensible assumptions.
    pub fn discover(project_root: &Path) -> Self {
        let candidate = project_root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> ProjectLayout {
        ProjectLayout {
            pages_dir: self.pages_dir,
            manifest_file: self.manifest_file,
            index_html_file: self.index_html_file,
            page_map_json: self.page_map_json,
            html_list_file: self.html_list_file,
        }
    }
}
