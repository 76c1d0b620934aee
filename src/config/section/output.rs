//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "metadata"    # One file per ordinal: metadata/0 .. metadata/176
//! log = "logs.txt"    # Progress log, reset on every run
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Metadata output directory. Must exist before `generate` runs.
    pub dir: PathBuf,

    /// Progress log file.
    pub log: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "metadata".into(),
            log: "logs.txt".into(),
        }
    }
}
