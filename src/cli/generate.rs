//! Metadata generation orchestration.
//!
//! Resolves the shuffle seed, builds the configured asset strategy and runs
//! it through the pipeline.

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{MintConfig, Strategy},
    log,
    pipeline::{AssetSource, DirectorySource, ManifestSource, Pipeline, RunSummary},
    utils::plural_count,
};

/// Generate one metadata record per collection ordinal.
pub fn generate(config: &MintConfig, quiet: bool) -> Result<RunSummary> {
    let seed = resolve_seed(config.source.seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = match config.source.strategy {
        Strategy::Manifest => {
            let source = ManifestSource::new(&config.source.manifest);
            log!("generate"; "seed {}", seed);
            run_with(&source, config, quiet, &mut rng)?
        }
        Strategy::Directory => {
            let source = DirectorySource::new(&config.source.images, config.legendary.clone());
            run_with(&source, config, quiet, &mut rng)?
        }
    };

    log!(
        "generate";
        "wrote {} to {} ({})",
        plural_count(summary.written, "record"),
        config.root_relative(&summary.output_dir).display(),
        summary.strategy
    );
    Ok(summary)
}

/// Configured seed, or a fresh one from the thread RNG.
fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| rand::rng().random())
}

fn run_with<S: AssetSource>(
    source: &S,
    config: &MintConfig,
    quiet: bool,
    rng: &mut StdRng,
) -> Result<RunSummary> {
    let settings = config.run_settings();
    Pipeline::new(source, &settings)
        .quiet(quiet)
        .run(rng)
        .with_context(|| {
            format!(
                "{} strategy failed reading '{}'",
                source.name(),
                config.source.active_path().display()
            )
        })
}
