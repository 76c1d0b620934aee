//! `[source]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [source]
//! strategy = "manifest"                   # manifest | directory
//! manifest = "TheFlameStartersTraits.txt" # Tab-delimited traits file
//! images = "images"                       # Category tree for `directory`
//! seed = 42                               # Optional shuffle seed
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How source assets are discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Tab-delimited manifest, ordinals shuffled.
    #[default]
    Manifest,
    /// Category directory tree, ordinals in sorted scan order.
    Directory,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Directory => "directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Active strategy.
    pub strategy: Strategy,

    /// Manifest file for the `manifest` strategy.
    pub manifest: PathBuf,

    /// Image root for the `directory` strategy.
    pub images: PathBuf,

    /// Fixed shuffle seed. Unset draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            manifest: "TheFlameStartersTraits.txt".into(),
            images: "images".into(),
            seed: None,
        }
    }
}

impl SourceConfig {
    /// Input path of the active strategy.
    pub fn active_path(&self) -> &Path {
        match self.strategy {
            Strategy::Manifest => &self.manifest,
            Strategy::Directory => &self.images,
        }
    }

    /// Replace the input path of the active strategy.
    pub fn set_active_path(&mut self, path: PathBuf) {
        match self.strategy {
            Strategy::Manifest => self.manifest = path,
            Strategy::Directory => self.images = path,
        }
    }
}
