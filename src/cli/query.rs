//! Query command implementation.
//!
//! Reads generated records back from the output directory by ordinal and
//! prints them as a JSON array.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::QueryArgs;
use crate::config::MintConfig;
use crate::core::PipelineError;
use crate::log;
use crate::metadata::{MetadataRecord, read_record, storage_key};
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &MintConfig) -> Result<()> {
    let ordinals = requested_ordinals(&args.ordinals, config.collection.size);
    let records = collect_records(&config.output.dir, &ordinals)?;
    let formatted = format_records(&records, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.file {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote {} to {}", plural_count(records.len(), "record"), output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// JSON array of records, the only thing `query` prints to stdout.
fn format_records(records: &[MetadataRecord], pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(formatted)
}

/// Explicit ordinals, or the whole collection `1..=size`.
fn requested_ordinals(requested: &[u64], size: usize) -> Vec<usize> {
    if requested.is_empty() {
        (1..=size).collect()
    } else {
        requested.iter().map(|&n| n as usize).collect()
    }
}

/// Read every requested record, failing with the full list of missing keys.
fn collect_records(output_dir: &Path, ordinals: &[usize]) -> Result<Vec<MetadataRecord>> {
    let mut records = Vec::with_capacity(ordinals.len());
    let mut missing = Vec::new();

    for &ordinal in ordinals {
        match read_record(output_dir, ordinal) {
            Ok(record) => records.push(record),
            Err(PipelineError::Io(_, err)) if err.kind() == std::io::ErrorKind::NotFound => {
                missing.push(storage_key(ordinal));
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("failed to read record #{ordinal}")));
            }
        }
    }

    if !missing.is_empty() {
        bail!(
            "{} missing in '{}': {}",
            plural_count(missing.len(), "record"),
            output_dir.display(),
            missing.join(", ")
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogTarget;
    use crate::metadata::{Attribute, MetadataWriter, image_uri};
    use tempfile::TempDir;

    fn written_collection(size: usize) -> TempDir {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("metadata");
        fs::create_dir_all(&output).unwrap();

        let mut writer = MetadataWriter::open(&output, &dir.path().join("logs.txt")).unwrap();
        for ordinal in 1..=size {
            let record = MetadataRecord::new(
                "FlameStarter",
                ordinal,
                image_uri("ipfs://cid/", "Common", &format!("{ordinal}.png")),
                vec![Attribute::new("Rarity", "Common")],
            );
            writer.write(ordinal, "Common", &record).unwrap();
        }
        dir
    }

    #[test]
    fn test_requested_ordinals_default_to_collection() {
        assert_eq!(requested_ordinals(&[], 3), vec![1, 2, 3]);
        assert_eq!(requested_ordinals(&[5, 2], 3), vec![5, 2]);
    }

    #[test]
    fn test_collect_records_in_requested_order() {
        let dir = written_collection(3);
        let records = collect_records(&dir.path().join("metadata"), &[3, 1]).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["FlameStarter #3", "FlameStarter #1"]);
    }

    #[test]
    fn test_collect_records_lists_missing_keys() {
        let dir = written_collection(2);
        let output = dir.path().join("metadata");
        fs::remove_file(output.join("0")).unwrap();

        let err = collect_records(&output, &[1, 2, 3, 4]).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("3 records missing"), "{message}");
        assert!(message.ends_with(": 0, 2, 3"), "{message}");
    }

    #[test]
    fn test_output_is_json_while_config_warns() {
        let dir = written_collection(2);
        let mut config = MintConfig::default();
        config.output.dir = dir.path().join("metadata");
        config.collection.size = 2;
        // Custom legendary table with the manifest strategy only warns
        config.legendary = [("1.png", "Hero")].into_iter().collect();
        config.validate().unwrap();
        assert_eq!(LogTarget::for_module("warning"), LogTarget::Stderr);

        let ordinals = requested_ordinals(&[], config.collection.size);
        let records = collect_records(&config.output.dir, &ordinals).unwrap();
        for pretty in [false, true] {
            let out = format_records(&records, pretty).unwrap();
            let parsed: Vec<MetadataRecord> = serde_json::from_str(&out).unwrap();
            assert_eq!(parsed, records);
        }
    }

    #[test]
    fn test_collect_records_rejects_corrupt_file() {
        let dir = written_collection(1);
        let output = dir.path().join("metadata");
        fs::write(output.join("0"), "not json").unwrap();
        assert!(collect_records(&output, &[1]).is_err());
    }
}
