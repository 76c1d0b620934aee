//! Source asset discovery.
//!
//! Two ways to enumerate a collection:
//! - [`scan_assets`]: walk an image tree whose top-level directories are categories
//! - [`load_manifest`]: read a tab-delimited manifest, one line per asset

mod legendary;
mod manifest;
mod record;
mod scan;

// Types
pub use legendary::LegendaryTable;
pub use manifest::ManifestLine;
pub use record::{ManifestAsset, ScannedAsset, SourceRecord};

// Enumeration (pure functions)
pub use manifest::load_manifest;
pub use scan::scan_assets;
