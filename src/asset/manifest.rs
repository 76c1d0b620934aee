//! Tab-delimited manifest loading.
//!
//! One line per asset, five tab-separated fields:
//!
//! ```text
//! 42.png<TAB>Rare<TAB>Skull<TAB>Hat<TAB>Fire
//! ```

use std::fs;
use std::path::Path;

use crate::core::PipelineError;

/// A raw manifest line with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLine {
    pub number: usize,
    pub text: String,
}

/// Load the first `count` lines of a manifest file
///
/// Accepts both `\n` and `\r\n` line endings. A trailing line terminator
/// does not produce an extra empty record.
///
/// Fails with [`PipelineError::InsufficientData`] when the file holds fewer
/// than `count` lines, so a short manifest never reaches the writer.
pub fn load_manifest(path: &Path, count: usize) -> Result<Vec<ManifestLine>, PipelineError> {
    let content = fs::read_to_string(path).map_err(|err| PipelineError::io(path, err))?;
    split_manifest(&content, count)
}

/// Split manifest text into exactly `count` numbered lines.
pub fn split_manifest(content: &str, count: usize) -> Result<Vec<ManifestLine>, PipelineError> {
    let lines: Vec<ManifestLine> = content
        .lines()
        .take(count)
        .enumerate()
        .map(|(i, text)| ManifestLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect();

    if lines.len() < count {
        return Err(PipelineError::InsufficientData {
            required: count,
            found: lines.len(),
        });
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_truncates() {
        let lines = split_manifest("a\nb\nc\nd\n", 3).unwrap();
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_split_crlf() {
        let lines = split_manifest("1.png\tRare\r\n2.png\tCommon\r\n", 2).unwrap();
        assert_eq!(lines[0].text, "1.png\tRare");
        assert_eq!(lines[1].text, "2.png\tCommon");
    }

    #[test]
    fn test_split_trailing_newline_not_a_record() {
        let err = split_manifest("a\nb\n", 3).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientData {
                required: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_split_exact_count_without_trailing_newline() {
        let lines = split_manifest("a\nb", 2).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_manifest(&dir.path().join("traits.txt"), 1).unwrap_err();
        assert!(matches!(err, PipelineError::Io(..)));
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("traits.txt");
        fs::write(&path, "42.png\tRare\tSkull\tHat\tFire\n").unwrap();

        let lines = load_manifest(&path, 1).unwrap();
        assert_eq!(lines[0].text, "42.png\tRare\tSkull\tHat\tFire");
    }
}
