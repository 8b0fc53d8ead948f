//! Flat file enumeration used to harvest asset candidates and HTML listings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Collect every file under `start_dir`, as paths relative to `project_root`.
///
/// Paths always use forward slashes so the resulting entries are valid manifest
/// asset declarations on every platform. A missing or non-directory `start_dir`
/// yields an empty list rather than an error; the caller decides whether that is
/// worth reporting. Output is sorted.
pub fn collect_files_relative(start_dir: &Path, project_root: &Path) -> Vec<String> {
    let mut paths = Vec::new();
    if !start_dir.is_dir() {
        return paths;
    }

    collect_files_into(start_dir, project_root, &mut paths);
    paths.sort();
    paths
}

fn collect_files_into(dir: &Path, project_root: &Path, out: &mut Vec<String>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name_str = file_name.to_string_lossy();
            if name_str.starts_with('.') {
                continue;
            }

            let path = entry.path();
            if let Ok(file_type) = entry.file_type() {
                if file_type.is_dir() {
                    collect_files_into(&path, project_root, out);
                } else if file_type.is_file() {
                    let relative = match path.strip_prefix(project_root) {
                        Ok(relative) => relative,
                        Err(_) => path.as_path(),
                    };
                    out.push(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }
}

/// Collect every `.html` file under `start_dir`.
///
/// The extension match is case-sensitive, mirroring how the exported tree names
/// its pages. Returned paths are rooted at `start_dir` as given and sorted.
pub fn find_html_files(start_dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if !start_dir.is_dir() {
        return found;
    }

    collect_html_into(start_dir, &mut found);
    found.sort();
    found
}

fn collect_html_into(dir: &Path, out: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let name_str = file_name.to_string_lossy();
            if name_str.starts_with('.') {
                continue;
            }

            let path = entry.path();
            if let Ok(file_type) = entry.file_type() {
                if file_type.is_dir() {
                    collect_html_into(&path, out);
                } else if file_type.is_file() && name_str.ends_with(".html") {
                    out.push(path);
                }
            }
        }
    }
}

/// Persist a file listing as one path per line.
pub fn write_html_list(paths: &[PathBuf], output: &Path) -> Result<()> {
    let mut content = paths
        .iter()
        .map(|path| path.to_string_lossy().replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    fs::write(output, content).with_context(|| format!("failed to write {}", output.display()))
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
    fn collects_relative_forward_slash_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("assets/html/index.html"), "<h1>Root</h1>");
        write_file(&root.join("assets/html/about/index.html"), "<h1>About</h1>");
        write_file(&root.join("assets/html/style.css"), "body {}");

        let paths = collect_files_relative(&root.join("assets/html"), root);

        assert_eq!(paths, vec![
            "assets/html/about/index.html".to_string(),
            "assets/html/index.html".to_string(),
            "assets/html/style.css".to_string(),
        ]);
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let paths = collect_files_relative(&dir.path().join("absent"), dir.path());
        assert!(paths.is_empty());
    }

    #[test]
    fn skips_hidden_entries() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("tree/.hidden"), "secret");
        write_file(&root.join("tree/.git/config"), "[core]");
        write_file(&root.join("tree/visible.txt"), "ok");

        let paths = collect_files_relative(&root.join("tree"), root);
        assert_eq!(paths, vec!["tree/visible.txt".to_string()]);
    }

    #[test]
    fn finds_only_html_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("pages/index.html"), "<h1></h1>");
        write_file(&root.join("pages/deep/page.html"), "<h1></h1>");
        write_file(&root.join("pages/page.HTML"), "<h1></h1>");
        write_file(&root.join("pages/readme.htm"), "<h1></h1>");
        write_file(&root.join("pages/notes.txt"), "notes");

        let found = find_html_files(&root.join("pages"));

        assert_eq!(found, vec![
            root.join("pages/deep/page.html"),
            root.join("pages/index.html"),
        ]);
    }

    #[test]
    fn writes_listing_one_path_per_line() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("html_files_list.txt");
        let paths = vec![PathBuf::from("a/index.html"), PathBuf::from("b/index.html")];

        write_html_list(&paths, &output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "a/index.html\nb/index.html\n");
    }
}
