//! Collection project initialization.
//!
//! Creates a project directory with a default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration and ignore file generation

mod config;
mod validate;

use crate::{config::MintConfig, log};
use anyhow::{Context, Result};
use std::fs;

/// Create a new collection project
///
/// # Steps
/// 1. Refuse to overwrite an existing config file
/// 2. Create the project root and the metadata output directory
/// 3. Write `mintmeta.toml` and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_collection(config: &MintConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = config.get_root();
    validate::validate_target(&config.config_path)?;

    fs::create_dir_all(&config.output.dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            config.output.dir.display()
        )
    })?;

    config::write_config(&config.config_path)?;
    config::write_ignore_files(
        root,
        &[
            config.root_relative(&config.output.dir),
            config.root_relative(&config.output.log),
        ],
    )?;

    log!("init"; "collection initialized in {}", root.display());
    Ok(())
}
