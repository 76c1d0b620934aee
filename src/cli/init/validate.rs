//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to initialize over an existing config file.
///
/// Image trees and manifests may already live in the target directory,
/// so only the config file itself is checked.
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "Config file '{}' already exists.\n\
             Edit it directly or remove it to start over.",
            config_path.display()
        );
    }
    Ok(())
}
