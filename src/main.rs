//! mintmeta - batch metadata generator for collectible image sets.

mod asset;
mod cli;
mod config;
mod core;
mod logger;
mod metadata;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::MintConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = MintConfig::load(cli)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_collection(&config, *dry),
        Commands::Generate { args } => cli::generate::generate(&config, args.quiet).map(|_| ()),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
