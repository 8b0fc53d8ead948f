//! Manifest inspection and editing broken into focused submodules for easier testing.

mod merge;
mod sync;

pub use merge::merge_asset_paths;
pub use sync::{ManifestSyncError, sync_manifest_assets};
