//! Canonical metadata record.
//!
//! Serialized field order is fixed and matches what minting frontends expect:
//!
//! ```json
//! {"name":"FlameStarter #5","description":"","image":"ipfs://…/Rare/42.png",
//!  "attributes":[{"trait_type":"Rarity","value":"Rare"}]}
//! ```

use serde::{Deserialize, Serialize};

/// One `{trait_type, value}` pair. Order inside a record is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Metadata for a single collectible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl MetadataRecord {
    /// Build the record for `ordinal`. The display name is `"<prefix> #<ordinal>"`.
    pub fn new(
        name_prefix: &str,
        ordinal: usize,
        image: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            name: format!("{name_prefix} #{ordinal}"),
            description: String::new(),
            image: image.into(),
            attributes,
        }
    }

    /// Compact JSON, byte-compatible with `JSON.stringify`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Join a content-addressed base with an image location.
///
/// Produces `<base>/<category>/<filename>` with exactly one `/` after the
/// base, whether or not `base` already ends with one.
///
/// # Examples
/// ```ignore
/// image_uri("ipfs://cid/", "Rare", "42.png") -> "ipfs://cid/Rare/42.png"
/// image_uri("ipfs://cid", "Rare", "42.png")  -> "ipfs://cid/Rare/42.png"
/// ```
pub fn image_uri(base: &str, category: &str, filename: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}/{category}/{filename}")
}
