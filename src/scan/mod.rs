//! Directory traversal utilities for the exported page tree, broken into focused
//! submodules so each walk can be tested independently.

mod files;
mod filters;
mod pages;
mod tree;

pub use files::{collect_files_relative, find_html_files, write_html_list};
pub use filters::is_junk_candidate;
pub use pages::find_pages_with_index;
pub use tree::{build_page_tree, build_root_page_tree};
