//! Metadata file writing.
//!
//! Each record lands at `<output_dir>/<ordinal - 1>` (no extension). A
//! progress log receives one `"<ordinal>: <identifier>"` line per asset and is
//! reset once when the writer opens.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::MetadataRecord;
use crate::core::PipelineError;
use crate::log;

/// Zero-based storage key for an ordinal.
///
/// Ordinals start at 1, so `ordinal` must be at least 1.
#[inline]
pub fn storage_key(ordinal: usize) -> String {
    (ordinal - 1).to_string()
}

/// Read back the record stored for `ordinal`.
pub fn read_record(output_dir: &Path, ordinal: usize) -> Result<MetadataRecord, PipelineError> {
    let path = output_dir.join(storage_key(ordinal));
    let content = fs::read_to_string(&path).map_err(|err| PipelineError::io(&path, err))?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes metadata records, at most once per ordinal within a run.
pub struct MetadataWriter {
    output_dir: PathBuf,
    log: Option<ProgressLog>,
    written: FxHashSet<usize>,
}

impl MetadataWriter {
    /// Open a writer for a pre-existing output directory.
    ///
    /// The output directory is not created here. The progress log at
    /// `log_path` is truncated; if that fails the run continues with a
    /// warning and without a progress log.
    pub fn open(output_dir: &Path, log_path: &Path) -> Result<Self, PipelineError> {
        let meta = fs::metadata(output_dir).map_err(|err| PipelineError::io(output_dir, err))?;
        if !meta.is_dir() {
            return Err(PipelineError::io(
                output_dir,
                io::Error::new(io::ErrorKind::NotADirectory, "output path is not a directory"),
            ));
        }

        let log = match ProgressLog::reset(log_path) {
            Ok(log) => Some(log),
            Err(e) => {
                log!("warning"; "cannot reset progress log `{}`: {}", log_path.display(), e);
                None
            }
        };

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            log,
            written: FxHashSet::default(),
        })
    }

    /// Persist `record` under `ordinal` and log `identifier`.
    ///
    /// Silently overwrites files from earlier runs. Writing the same ordinal
    /// twice in one run is an error.
    pub fn write(
        &mut self,
        ordinal: usize,
        identifier: &str,
        record: &MetadataRecord,
    ) -> Result<PathBuf, PipelineError> {
        if ordinal == 0 || !self.written.insert(ordinal) {
            return Err(PipelineError::DuplicateOrdinal(ordinal));
        }

        if let Some(log) = self.log.as_mut() {
            log.append(ordinal, identifier)?;
        }

        let path = self.output_dir.join(storage_key(ordinal));
        let json = record.to_json()?;
        fs::write(&path, json).map_err(|err| PipelineError::io(&path, err))?;

        Ok(path)
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written.len()
    }
}

/// Human-readable progress log, truncated once per run.
struct ProgressLog {
    path: PathBuf,
    file: File,
}

impl ProgressLog {
    fn reset(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn append(&mut self, ordinal: usize, identifier: &str) -> Result<(), PipelineError> {
        writeln!(self.file, "{ordinal}: {identifier}")
            .map_err(|err| PipelineError::io(&self.path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Attribute, image_uri};
    use tempfile::TempDir;

    fn record(ordinal: usize) -> MetadataRecord {
        MetadataRecord::new(
            "FlameStarter",
            ordinal,
            image_uri("ipfs://cid/", "Common", "1.png"),
            vec![
                Attribute::new("Rarity", "Common"),
                Attribute::new("Legendary", ""),
            ],
        )
    }

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("metadata");
        fs::create_dir_all(&output).unwrap();
        let log = dir.path().join("logs.txt");
        (dir, output, log)
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key(1), "0");
        assert_eq!(storage_key(177), "176");
    }

    #[test]
    fn test_write_zero_based_key() {
        let (_dir, output, log) = setup();
        let mut writer = MetadataWriter::open(&output, &log).unwrap();

        let path = writer.write(5, "Common/1.png", &record(5)).unwrap();
        assert_eq!(path, output.join("4"));
        assert_eq!(read_record(&output, 5).unwrap(), record(5));
        assert_eq!(writer.written(), 1);
    }

    #[test]
    fn test_write_appends_log_lines() {
        let (_dir, output, log) = setup();
        fs::write(&log, "stale line from last run\n").unwrap();

        let mut writer = MetadataWriter::open(&output, &log).unwrap();
        writer.write(1, "Common/1.png", &record(1)).unwrap();
        writer.write(2, "Rare/2.png", &record(2)).unwrap();
        drop(writer);

        let content = fs::read_to_string(&log).unwrap();
        assert_eq!(content, "1: Common/1.png\n2: Rare/2.png\n");
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let (_dir, output, log) = setup();
        fs::write(output.join("0"), "old").unwrap();

        let mut writer = MetadataWriter::open(&output, &log).unwrap();
        writer.write(1, "Common/1.png", &record(1)).unwrap();

        assert_eq!(read_record(&output, 1).unwrap(), record(1));
    }

    #[test]
    fn test_write_once_per_ordinal() {
        let (_dir, output, log) = setup();
        let mut writer = MetadataWriter::open(&output, &log).unwrap();

        writer.write(3, "a", &record(3)).unwrap();
        let err = writer.write(3, "b", &record(3)).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateOrdinal(3)));
        assert!(matches!(
            writer.write(0, "c", &record(0)),
            Err(PipelineError::DuplicateOrdinal(0))
        ));
    }

    #[test]
    fn test_open_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let err = MetadataWriter::open(&dir.path().join("metadata"), &dir.path().join("logs.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Io(..)));
    }

    #[test]
    fn test_unwritable_log_is_not_fatal() {
        let (dir, output, _) = setup();
        // A directory cannot be truncated as a file
        let log = dir.path().join("logs");
        fs::create_dir_all(&log).unwrap();

        let mut writer = MetadataWriter::open(&output, &log).unwrap();
        writer.write(1, "Common/1.png", &record(1)).unwrap();
        assert!(output.join("0").exists());
    }
}
