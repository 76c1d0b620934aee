//! Asset-to-metadata assignment pipeline.
//!
//! ```text
//! Enumerating ──► Assigning ──► Writing ──► Done
//!  (scan/load)   (shuffle,     (derive +
//!                 manifest)     write 1..=N)
//! ```
//!
//! Every source record is parsed during `Enumerating`, so format and size
//! errors abort the run before the first file is written. A failure while
//! writing aborts immediately; files already written stay on disk.

mod attributes;
mod shuffle;
mod source;

pub use shuffle::shuffle;
pub use source::{AssetSource, DirectorySource, ManifestSource};

use std::path::PathBuf;

use rand::Rng;

use crate::asset::SourceRecord;
use crate::core::{Phase, PipelineError};
use crate::logger::ProgressLine;
use crate::debug;
use crate::metadata::{MetadataRecord, MetadataWriter, image_uri};

/// Collection-wide settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Collection size `N`.
    pub size: usize,
    /// Display name prefix (`"FlameStarter"` -> `"FlameStarter #1"`).
    pub name: String,
    /// Content-addressed root of the image tree.
    pub base_uri: String,
    /// Pre-existing directory receiving one file per ordinal.
    pub output_dir: PathBuf,
    /// Progress log, reset at the start of the writing phase.
    pub log_file: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub strategy: &'static str,
    pub written: usize,
    pub output_dir: PathBuf,
}

/// Drives one asset strategy through a full run.
pub struct Pipeline<'a, S: AssetSource> {
    source: &'a S,
    settings: &'a RunSettings,
    phase: Phase,
    quiet: bool,
}

impl<'a, S: AssetSource> Pipeline<'a, S> {
    pub fn new(source: &'a S, settings: &'a RunSettings) -> Self {
        Self {
            source,
            settings,
            phase: Phase::Enumerating,
            quiet: false,
        }
    }

    /// Suppress the progress display.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run all phases. Randomness for the shuffle comes from `rng`.
    ///
    /// A finished pipeline starts over from `Enumerating` when run again.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RunSummary, PipelineError> {
        self.phase = Phase::Enumerating;
        self.trace();
        let records = self.source.enumerate(self.settings.size)?;

        self.advance();
        let records = if self.source.shuffles() {
            shuffle(records, rng)
        } else {
            records
        };

        self.advance();
        let written = self.write_all(&records)?;

        self.advance();
        Ok(RunSummary {
            strategy: self.source.name(),
            written,
            output_dir: self.settings.output_dir.clone(),
        })
    }

    /// Write records in increasing ordinal order.
    fn write_all(&self, records: &[S::Record]) -> Result<usize, PipelineError> {
        let mut writer = MetadataWriter::open(&self.settings.output_dir, &self.settings.log_file)?;
        let progress = (!self.quiet).then(|| ProgressLine::new(&[("assets", records.len())]));

        for (index, record) in records.iter().enumerate() {
            let ordinal = index + 1;
            debug!("asset"; "{}: {}", ordinal, record.identifier());

            let metadata = self.build_record(ordinal, record);
            writer
                .write(ordinal, record.identifier(), &metadata)
                .map_err(|e| e.at_ordinal(ordinal, record.identifier()))?;

            if let Some(p) = &progress {
                p.inc("assets");
            }
        }

        if let Some(p) = progress {
            p.finish();
        }
        Ok(writer.written())
    }

    fn build_record(&self, ordinal: usize, record: &S::Record) -> MetadataRecord {
        MetadataRecord::new(
            &self.settings.name,
            ordinal,
            image_uri(&self.settings.base_uri, record.category(), record.filename()),
            self.source.derive(record),
        )
    }

    fn advance(&mut self) {
        self.phase = self.phase.next();
        self.trace();
    }

    fn trace(&self) {
        debug!("pipeline"; "{} ({})", self.phase, self.source.name());
    }
}
