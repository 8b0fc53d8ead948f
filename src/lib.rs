#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod manifest;
pub mod models;
pub mod project;
pub mod scan;

pub use config::ProjectConfig;
pub use models::{IndexedPageRecord, MergeOutcome, PageTreeNode, SyncReport};
pub use project::ProjectLayout;
