//! Nested map of directories that directly or transitively lead to an index page.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::models::PageTreeNode;

/// Build the nested map for the children of `dir`.
///
/// A subdirectory appears in the map when it contains the index file itself or
/// when any descendant qualifies; empty branches are pruned entirely. Unreadable
/// subdirectories are reported on stderr and skipped so one bad permission does
/// not abort the whole walk.
pub fn build_page_tree(dir: &Path, index_html_file: &str) -> BTreeMap<String, PageTreeNode> {
    let mut children = BTreeMap::new();
    if !dir.is_dir() {
        return children;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Warning: could not access {}, skipping: {err}", dir.display());
            return children;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if !entry.file_type().is_ok_and(|ft| ft.is_dir()) {
            continue;
        }

        let child_path = entry.path();
        let index_path = child_path.join(index_html_file);
        let has_index = index_path.is_file();

        let nested = build_page_tree(&child_path, index_html_file);

        if has_index || !nested.is_empty() {
            children.insert(name, PageTreeNode {
                parent: dir.to_path_buf(),
                index_path: has_index.then_some(index_path),
                children: nested,
            });
        }
    }

    children
}

/// Build the nested map with `root` itself as the single top-level key.
///
/// The recursive walk only describes children, so the root directory gets the
/// same qualification check applied separately before being wrapped into the
/// returned map under `root_key`.
pub fn build_root_page_tree(
    root: &Path,
    root_key: &str,
    index_html_file: &str,
) -> BTreeMap<String, PageTreeNode> {
    let mut map = BTreeMap::new();

    let root_index = root.join(index_html_file);
    let root_has_index = root_index.is_file();
    let children = build_page_tree(root, index_html_file);

    if root_has_index || !children.is_empty() {
        map.insert(root_key.to_string(), PageTreeNode {
            parent: root.parent().map(Path::to_path_buf).unwrap_or_default(),
            index_path: root_has_index.then_some(root_index),
            children,
        });
    }

    map
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
    fn includes_directories_with_qualifying_descendants() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        write_file(&root.join("products/details/index.html"), "<h1>Details</h1>");
        write_file(&root.join("products/product1.html"), "<h1>Product 1</h1>");
        fs::create_dir_all(root.join("contact")).unwrap();

        let map = build_page_tree(&root, "index.html");

        let products = map.get("products").expect("products should qualify");
        assert!(products.index_path.is_none());
        let details = products
            .children
            .get("details")
            .expect("details should qualify");
        assert_eq!(
            details.index_path.as_deref(),
            Some(root.join("products/details/index.html").as_path())
        );
        assert!(!map.contains_key("contact"));
    }

    #[test]
    fn root_wrapper_includes_root_index() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        write_file(&root.join("index.html"), "<h1>Root</h1>");
        write_file(&root.join("about/index.html"), "<h1>About</h1>");

        let map = build_root_page_tree(&root, "assets/html", "index.html");

        let node = map.get("assets/html").expect("root should qualify");
        assert_eq!(
            node.index_path.as_deref(),
            Some(root.join("index.html").as_path())
        );
        assert!(node.children.contains_key("about"));
    }

    #[test]
    fn empty_tree_produces_empty_map() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        fs::create_dir_all(root.join("empty/branch")).unwrap();

        let map = build_root_page_tree(&root, "assets/html", "index.html");
        assert!(map.is_empty());
    }

    #[test]
    fn serializes_without_absent_index_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("html");
        write_file(&root.join("products/details/index.html"), "<h1></h1>");

        let map = build_page_tree(&root, "index.html");
        let json = serde_json::to_string_pretty(&map).unwrap();

        assert!(json.contains("\"details\""));
        assert_eq!(json.matches("index_path").count(), 1);
    }
}
