//! Asset strategies.
//!
//! Both strategies produce the same output contract and differ only in how
//! they discover assets and derive attributes:
//!
//! | Strategy    | Source                | Shuffled | Identifier in log |
//! |-------------|-----------------------|----------|-------------------|
//! | `directory` | image tree            | no       | relative path     |
//! | `manifest`  | tab-delimited file    | yes      | image file        |

use std::path::PathBuf;

use super::attributes::{manifest_attributes, scanned_attributes};
use crate::asset::{
    LegendaryTable, ManifestAsset, ScannedAsset, SourceRecord, load_manifest, scan_assets,
};
use crate::core::PipelineError;
use crate::log;
use crate::metadata::Attribute;
use crate::utils::plural_count;

/// A way of enumerating a collection and deriving its attributes.
pub trait AssetSource {
    type Record: SourceRecord;

    /// Strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Return exactly `count` records, or fail before anything is written.
    fn enumerate(&self, count: usize) -> Result<Vec<Self::Record>, PipelineError>;

    /// Whether ordinals are assigned in random order.
    fn shuffles(&self) -> bool {
        false
    }

    /// Ordered attribute list for one record.
    fn derive(&self, record: &Self::Record) -> Vec<Attribute>;
}

// ============================================================================
// Directory strategy
// ============================================================================

/// Assets discovered by scanning a category tree. Ordinal = sorted scan order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    legendary: LegendaryTable,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, legendary: LegendaryTable) -> Self {
        Self {
            root: root.into(),
            legendary,
        }
    }
}

impl AssetSource for DirectorySource {
    type Record = ScannedAsset;

    fn name(&self) -> &'static str {
        "directory"
    }

    fn enumerate(&self, count: usize) -> Result<Vec<ScannedAsset>, PipelineError> {
        let mut paths = scan_assets(&self.root)?;
        if paths.len() < count {
            return Err(PipelineError::InsufficientData {
                required: count,
                found: paths.len(),
            });
        }

        if paths.len() > count {
            log!(
                "warning";
                "{} found, only the first {} are used",
                plural_count(paths.len(), "image"),
                count
            );
            paths.truncate(count);
        }

        paths.into_iter().map(ScannedAsset::parse).collect()
    }

    fn derive(&self, record: &ScannedAsset) -> Vec<Attribute> {
        scanned_attributes(record, &self.legendary)
    }
}

// ============================================================================
// Manifest strategy
// ============================================================================

/// Assets listed in a tab-delimited manifest. Ordinals are shuffled.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Short name used in format errors (`traits.txt:12`).
    fn origin(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl AssetSource for ManifestSource {
    type Record = ManifestAsset;

    fn name(&self) -> &'static str {
        "manifest"
    }

    fn enumerate(&self, count: usize) -> Result<Vec<ManifestAsset>, PipelineError> {
        let origin = self.origin();
        load_manifest(&self.path, count)?
            .iter()
            .map(|line| ManifestAsset::parse(line, &origin))
            .collect()
    }

    fn shuffles(&self) -> bool {
        true
    }

    fn derive(&self, record: &ManifestAsset) -> Vec<Attribute> {
        manifest_attributes(record)
    }
}
