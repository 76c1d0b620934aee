//! Configuration file generation.
//!
//! Creates mintmeta.toml and ignore files for new collections.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::asset::LegendaryTable;
use crate::config::{CollectionConfig, OutputConfig, SourceConfig};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate mintmeta.toml content with comments
pub fn generate_config_template() -> String {
    let collection = CollectionConfig::default();
    let source = SourceConfig::default();
    let output = OutputConfig::default();

    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# mintmeta configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str("[collection]\n");
    out.push_str("# Number of records to generate, ordinals run from 1 to size\n");
    out.push_str(&format!("size = {}\n", collection.size));
    out.push_str("# Display name prefix, records are named \"<name> #<ordinal>\"\n");
    out.push_str(&format!("name = {:?}\n", collection.name));
    out.push_str("# Content-addressed root of the image tree, must end with `/`\n");
    out.push_str(&format!("base_uri = {:?}\n\n", collection.base_uri));

    out.push_str("[source]\n");
    out.push_str("# manifest: tab-delimited traits file, ordinals shuffled\n");
    out.push_str("# directory: <category>/<filename> image tree, ordinals in sorted order\n");
    out.push_str(&format!("strategy = {:?}\n", source.strategy.as_str()));
    out.push_str(&format!("manifest = {:?}\n", display(&source.manifest)));
    out.push_str(&format!("images = {:?}\n", display(&source.images)));
    out.push_str("# Fixed shuffle seed, a fresh one is drawn and logged when unset\n");
    out.push_str("# seed = 42\n\n");

    out.push_str("[output]\n");
    out.push_str("# One file per ordinal, must exist before generating\n");
    out.push_str(&format!("dir = {:?}\n", display(&output.dir)));
    out.push_str("# Progress log, reset on every run\n");
    out.push_str(&format!("log = {:?}\n\n", display(&output.log)));

    out.push_str("# Image filename to legendary label (directory strategy)\n");
    out.push_str("[legendary]\n");
    for (filename, label) in LegendaryTable::default().entries() {
        out.push_str(&format!("{filename:?} = {label:?}\n"));
    }

    out
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Write default mintmeta.toml configuration
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files listing generated outputs
///
/// Existing ignore files are left untouched.
pub fn write_ignore_files(root: &Path, generated: &[PathBuf]) -> Result<()> {
    let mut patterns: Vec<String> = generated
        .iter()
        .map(|p| Path::new("/").join(p).to_string_lossy().into_owned())
        .collect();
    patterns.push(".DS_Store".to_string());

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
