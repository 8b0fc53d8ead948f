//! Flat enumeration of directories that contain an index page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::models::IndexedPageRecord;

/// Walk `root` collecting a record for every directory that contains the index file.
///
/// The root itself participates, so a page tree whose top directory holds an
/// `index.html` produces a record for it. Records are ordered depth-first with
/// siblings visited in name order, which keeps the JSON report stable across runs.
pub fn find_pages_with_index(root: &Path, index_html_file: &str) -> Result<Vec<IndexedPageRecord>> {
    if !root.is_dir() {
        bail!(
            "root directory {} not found or is not a directory",
            root.display()
        );
    }

    let mut records = Vec::new();
    visit_directory(root, index_html_file, &mut records);
    Ok(records)
}

fn visit_directory(dir: &Path, index_html_file: &str, records: &mut Vec<IndexedPageRecord>) {
    let index_path = dir.join(index_html_file);
    if index_path.is_file() {
        records.push(IndexedPageRecord {
            folder_name: folder_name(dir),
            parent_folder_path: dir.parent().map(Path::to_path_buf).unwrap_or_default(),
            folder_full_path: dir.to_path_buf(),
            index_html_path: index_path,
        });
    }

    for child in sorted_subdirectories(dir) {
        visit_directory(&child, index_html_file, records);
    }
}

fn folder_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

fn sorted_subdirectories(dir: &Path) -> Vec<PathBuf> {
    let mut subdirs = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name_str = entry.file_name().to_string_lossy().into_owned();
            if name_str.starts_with('.') {
                continue;
            }
            if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
                subdirs.push(entry.path());
            }
        }
    }
    subdirs.sort();
    subdirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn records_root_and_nested_matches() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        write_file(&root.join("index.html"), "<h1>Root</h1>");
        write_file(&root.join("about/index.html"), "<h1>About</h1>");
        write_file(&root.join("products/product1.html"), "<h1>Product 1</h1>");
        write_file(&root.join("products/details/index.html"), "<h1>Details</h1>");
        fs::create_dir_all(root.join("contact")).unwrap();

        let records = find_pages_with_index(&root, "index.html").unwrap();

        let names: Vec<&str> = records
            .iter()
            .map(|record| record.folder_name.as_str())
            .collect();
        assert_eq!(names, vec!["html", "about", "details"]);

        let details = &records[2];
        assert_eq!(details.folder_full_path, root.join("products/details"));
        assert_eq!(details.parent_folder_path, root.join("products"));
        assert_eq!(
            details.index_html_path,
            root.join("products/details/index.html")
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let result = find_pages_with_index(&dir.path().join("absent"), "index.html");
        assert!(result.is_err());
    }

    #[test]
    fn directories_without_index_produce_no_records() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        write_file(&root.join("products/product1.html"), "<h1>Product 1</h1>");

        let records = find_pages_with_index(&root, "index.html").unwrap();
        assert!(records.is_empty());
    }
}
