//! Collection configuration management for `mintmeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── collection # [collection]
//! │   ├── output     # [output]
//! │   └── source     # [source]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # MintConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[collection]` | Collection size, display name, base URI         |
//! | `[source]`     | Strategy, manifest file, image root, seed       |
//! | `[output]`     | Metadata directory, progress log                |
//! | `[legendary]`  | Filename to legendary label table               |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_from_root};

// Re-export from section/
pub use section::{CollectionConfig, OutputConfig, SourceConfig, Strategy};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    asset::LegendaryTable,
    cli::{Cli, Commands, GenerateArgs},
    log,
    pipeline::RunSettings,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing mintmeta.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MintConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Collection identity
    #[serde(default)]
    pub collection: CollectionConfig,

    /// Asset discovery
    #[serde(default)]
    pub source: SourceConfig,

    /// Output locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Legendary filename lookup (directory strategy)
    #[serde(default)]
    pub legendary: LegendaryTable,
}

impl MintConfig {
    pub const LEGENDARY: FieldPath = FieldPath::new("legendary");

    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'mintmeta init' to create one",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli)?;

        // Init writes the config, nothing to validate yet
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name, .. } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match &cli.command {
            Commands::Init { .. } => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .context("config path has no parent directory")?,
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        if let Commands::Generate { args } = &cli.command {
            crate::logger::set_verbose(args.verbose);
            self.apply_generate_args(args);
        }
        if let Some(output) = &cli.output {
            self.output.dir = output.clone();
        }

        self.normalize_paths(&root);
        Ok(())
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Collection-wide settings for a pipeline run.
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            size: self.collection.size,
            name: self.collection.name.clone(),
            base_uri: self.collection.base_uri.clone(),
            output_dir: self.output.dir.clone(),
            log_file: self.output.log.clone(),
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply generate arguments from CLI.
    ///
    /// The strategy is applied first so `--source` replaces the input path
    /// of the strategy that will actually run.
    fn apply_generate_args(&mut self, args: &GenerateArgs) {
        Self::update_option(&mut self.source.strategy, args.strategy.as_ref());
        if let Some(path) = &args.source {
            self.source.set_active_path(path.clone());
        }
        Self::update_option(&mut self.collection.size, args.size.as_ref());
        Self::update_option(&mut self.collection.base_uri, args.base_uri.as_ref());
        if args.seed.is_some() {
            self.source.seed = args.seed;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        self.source.manifest = resolve_from_root(&root, &self.source.manifest);
        self.source.images = resolve_from_root(&root, &self.source.images);
        self.output.dir = resolve_from_root(&root, &self.output.dir);
        self.output.log = resolve_from_root(&root, &self.output.log);

        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.collection.validate(&mut diag);
        self.validate_legendary(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Legendary keys are matched against bare filenames.
    fn validate_legendary(&self, diag: &mut ConfigDiagnostics) {
        for (filename, label) in self.legendary.entries() {
            if filename.trim().is_empty() || filename.contains('/') || filename.contains('\\') {
                diag.error_with_hint(
                    Self::LEGENDARY,
                    format!("`{filename}` is not a bare filename"),
                    "keys are matched against the file name only, e.g. \"164.png\"",
                );
            } else if label.is_empty() {
                diag.warn(
                    Self::LEGENDARY,
                    format!("`{filename}` maps to an empty label"),
                );
            }
        }

        if self.source.strategy == Strategy::Manifest && self.legendary != LegendaryTable::default() {
            diag.warn(
                Self::LEGENDARY,
                "the manifest strategy does not use the legendary table",
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> MintConfig {
    let (parsed, ignored) = MintConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(MintConfig::parse_with_ignored("[collection\nsize = 1").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = MintConfig::default();
        assert_eq!(config.collection.size, 177);
        assert_eq!(config.collection.name, "FlameStarter");
        assert_eq!(config.source.strategy, Strategy::Manifest);
        assert_eq!(config.output.dir, PathBuf::from("metadata"));
        assert_eq!(config.output.log, PathBuf::from("logs.txt"));
        assert_eq!(config.legendary.lookup("164.png"), "Pokémon");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections() {
        let config = test_parse_config(
            r#"
[collection]
size = 3
name = "Test"
base_uri = "ipfs://cid/"

[source]
strategy = "directory"
images = "art"
seed = 7

[output]
dir = "out"

[legendary]
"1.png" = "Hero"
"#,
        );
        assert_eq!(config.collection.size, 3);
        assert_eq!(config.source.strategy, Strategy::Directory);
        assert_eq!(config.source.seed, Some(7));
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.log, PathBuf::from("logs.txt"));
        assert_eq!(config.legendary.entries(), vec![("1.png", "Hero")]);
        assert_eq!(config.legendary.lookup("164.png"), "");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[collection]\nsize = 2\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = MintConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.collection.size, 2);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_legendary_keys() {
        let mut config = MintConfig::default();
        config.legendary = [("Common/1.png", "Hero")].into_iter().collect();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generate_args_override_config() {
        let cli = Cli::parse_from([
            "mintmeta",
            "generate",
            "--strategy",
            "directory",
            "--source",
            "art",
            "--size",
            "12",
            "--seed",
            "5",
            "-V",
        ]);
        let Commands::Generate { args } = &cli.command else {
            panic!("expected generate");
        };

        let mut config = MintConfig::default();
        config.apply_generate_args(args);
        assert_eq!(config.source.strategy, Strategy::Directory);
        assert_eq!(config.source.images, PathBuf::from("art"));
        assert_eq!(config.source.manifest, PathBuf::from("TheFlameStartersTraits.txt"));
        assert_eq!(config.collection.size, 12);
        assert_eq!(config.source.seed, Some(5));
        // The verbose flag is global and only set while finalizing
        assert!(args.verbose);
    }

    #[test]
    fn test_normalize_paths_against_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("metadata")).unwrap();

        let mut config = MintConfig::default();
        config.normalize_paths(dir.path());

        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.output.dir, root.join("metadata"));
        assert_eq!(config.output.log, root.join("logs.txt"));
        assert_eq!(config.root_relative(&config.source.images), PathBuf::from("images"));
    }

    #[test]
    fn test_run_settings() {
        let settings = MintConfig::default().run_settings();
        assert_eq!(settings.size, 177);
        assert_eq!(settings.name, "FlameStarter");
        assert!(settings.base_uri.starts_with("ipfs://"));
    }
}
