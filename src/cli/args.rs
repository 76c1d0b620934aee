//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Strategy;

/// Mintmeta collectible metadata generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Metadata output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: mintmeta.toml)
    #[arg(short = 'C', long, default_value = "mintmeta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new collection project with a default config
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Generate one metadata record per collection ordinal
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Read generated metadata records back
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// How assets are discovered
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Manifest file or image directory, depending on the strategy
    #[arg(long, value_hint = clap::ValueHint::AnyPath)]
    pub source: Option<PathBuf>,

    /// Collection size (number of records to write)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Content-addressed base URI of the image tree (must end with `/`)
    #[arg(short = 'B', long = "base-uri", value_hint = clap::ValueHint::Url)]
    pub base_uri: Option<String>,

    /// Seed for the ordinal shuffle. A random seed is drawn and logged if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Hide the progress line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Ordinals to read (1-based). If omitted, reads the whole collection
    #[arg(value_name = "ORDINAL", value_parser = clap::value_parser!(u64).range(1..))]
    pub ordinals: Vec<u64>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}
