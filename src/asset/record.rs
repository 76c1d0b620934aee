//! Source records produced by the two asset strategies.

use super::ManifestLine;
use crate::core::PipelineError;

/// Number of tab-separated fields in a manifest line.
pub const MANIFEST_FIELDS: usize = 5;

/// A single source asset, whatever strategy produced it.
pub trait SourceRecord {
    /// Category segment of the image location (first path segment).
    fn category(&self) -> &str;

    /// File segment of the image location.
    fn filename(&self) -> &str;

    /// Identifier written to the progress log.
    fn identifier(&self) -> &str;
}

// ============================================================================
// ScannedAsset
// ============================================================================

/// An image found by the directory scanner, e.g. `Common/164.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedAsset {
    relative_path: String,
    /// Byte offset of the first `/`.
    split: usize,
}

impl ScannedAsset {
    /// Split a scanned relative path at its first separator.
    ///
    /// Files placed directly in the scan root have no category and are
    /// rejected.
    pub fn parse(relative_path: impl Into<String>) -> Result<Self, PipelineError> {
        let relative_path = relative_path.into();
        let split = match relative_path.find('/') {
            Some(i) if i > 0 && i + 1 < relative_path.len() => i,
            _ => {
                return Err(PipelineError::format(
                    relative_path,
                    "asset is not inside a category directory",
                ));
            }
        };
        Ok(Self {
            relative_path,
            split,
        })
    }
}

impl SourceRecord for ScannedAsset {
    fn category(&self) -> &str {
        &self.relative_path[..self.split]
    }

    fn filename(&self) -> &str {
        &self.relative_path[self.split + 1..]
    }

    fn identifier(&self) -> &str {
        &self.relative_path
    }
}

// ============================================================================
// ManifestAsset
// ============================================================================

/// One manifest line split into its five fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestAsset {
    pub raw_line: String,
    pub image_file: String,
    pub rarity: String,
    pub design: String,
    pub accessory: String,
    pub special: String,
}

impl ManifestAsset {
    /// Split a manifest line into fields.
    ///
    /// Field values are kept verbatim. Missing trailing fields become empty
    /// strings; more than five fields, or an empty image file, is a format
    /// error. `origin` names the line in error messages (`traits.txt:12`).
    pub fn parse(line: &ManifestLine, origin: &str) -> Result<Self, PipelineError> {
        let at = || format!("{}:{}", origin, line.number);

        let fields: Vec<&str> = line.text.split('\t').collect();
        if fields.len() > MANIFEST_FIELDS {
            return Err(PipelineError::format(
                at(),
                format!(
                    "expected {MANIFEST_FIELDS} tab-separated fields, found {}",
                    fields.len()
                ),
            ));
        }

        let field = |i: usize| fields.get(i).copied().unwrap_or_default().to_string();
        let image_file = field(0);
        if image_file.trim().is_empty() {
            return Err(PipelineError::format(
                at(),
                "image file field is empty; other fields may be blank, the image file may not",
            ));
        }

        Ok(Self {
            raw_line: line.text.clone(),
            image_file,
            rarity: field(1),
            design: field(2),
            accessory: field(3),
            special: field(4),
        })
    }
}

impl SourceRecord for ManifestAsset {
    fn category(&self) -> &str {
        &self.rarity
    }

    fn filename(&self) -> &str {
        &self.image_file
    }

    fn identifier(&self) -> &str {
        &self.image_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> ManifestLine {
        ManifestLine {
            number: 7,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_scanned_split_on_first_separator() {
        let asset = ScannedAsset::parse("Common/164.png").unwrap();
        assert_eq!(asset.category(), "Common");
        assert_eq!(asset.filename(), "164.png");
        assert_eq!(asset.identifier(), "Common/164.png");

        let nested = ScannedAsset::parse("Rare/alt/42.png").unwrap();
        assert_eq!(nested.category(), "Rare");
        assert_eq!(nested.filename(), "alt/42.png");
    }

    #[test]
    fn test_scanned_uncategorized_rejected() {
        assert!(matches!(
            ScannedAsset::parse("164.png"),
            Err(PipelineError::Format { .. })
        ));
        assert!(ScannedAsset::parse("/164.png").is_err());
        assert!(ScannedAsset::parse("Common/").is_err());
    }

    #[test]
    fn test_manifest_fields() {
        let asset = ManifestAsset::parse(&line("42.png\tRare\tSkull\tHat\tFire"), "t.txt").unwrap();
        assert_eq!(asset.image_file, "42.png");
        assert_eq!(asset.rarity, "Rare");
        assert_eq!(asset.design, "Skull");
        assert_eq!(asset.accessory, "Hat");
        assert_eq!(asset.special, "Fire");
        assert_eq!(asset.category(), "Rare");
        assert_eq!(asset.filename(), "42.png");
        assert_eq!(asset.identifier(), "42.png");
    }

    #[test]
    fn test_manifest_short_line_pads_empty() {
        let asset = ManifestAsset::parse(&line("42.png\tRare"), "t.txt").unwrap();
        assert_eq!(asset.design, "");
        assert_eq!(asset.accessory, "");
        assert_eq!(asset.special, "");
    }

    #[test]
    fn test_manifest_empty_fields_kept() {
        let asset = ManifestAsset::parse(&line("42.png\tRare\t\tHat\t"), "t.txt").unwrap();
        assert_eq!(asset.design, "");
        assert_eq!(asset.accessory, "Hat");
        assert_eq!(asset.special, "");
    }

    #[test]
    fn test_manifest_too_many_fields() {
        let err = ManifestAsset::parse(&line("a\tb\tc\td\te\tf"), "t.txt").unwrap_err();
        match err {
            PipelineError::Format { origin, reason } => {
                assert_eq!(origin, "t.txt:7");
                assert!(reason.contains("found 6"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_manifest_blank_line_rejected() {
        assert!(ManifestAsset::parse(&line(""), "t.txt").is_err());
    }

    #[test]
    fn test_manifest_empty_image_field_explained() {
        match ManifestAsset::parse(&line("\tRare\tX\tY\tZ"), "t.txt") {
            Err(PipelineError::Format { reason, .. }) => {
                assert!(reason.starts_with("image file field is empty"), "{reason}");
                assert!(reason.contains("other fields may be blank"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
