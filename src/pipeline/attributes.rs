//! Attribute derivation for both asset strategies.
//!
//! | Strategy    | Attributes (in order)                   |
//! |-------------|-----------------------------------------|
//! | `directory` | Rarity, Legendary                       |
//! | `manifest`  | Rarity, Design, Accessory, Special      |

use crate::asset::{LegendaryTable, ManifestAsset, ScannedAsset, SourceRecord};
use crate::metadata::Attribute;

pub const RARITY: &str = "Rarity";
pub const LEGENDARY: &str = "Legendary";
pub const DESIGN: &str = "Design";
pub const ACCESSORY: &str = "Accessory";
pub const SPECIAL: &str = "Special";

/// Attributes of a scanned image: its category and legendary label.
///
/// The `Legendary` attribute is always present, empty on a table miss.
pub fn scanned_attributes(asset: &ScannedAsset, table: &LegendaryTable) -> Vec<Attribute> {
    vec![
        Attribute::new(RARITY, asset.category()),
        Attribute::new(LEGENDARY, table.lookup(asset.filename())),
    ]
}

/// Attributes of a manifest line, copied verbatim from its fields.
pub fn manifest_attributes(asset: &ManifestAsset) -> Vec<Attribute> {
    vec![
        Attribute::new(RARITY, asset.rarity.as_str()),
        Attribute::new(DESIGN, asset.design.as_str()),
        Attribute::new(ACCESSORY, asset.accessory.as_str()),
        Attribute::new(SPECIAL, asset.special.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ManifestLine;

    fn pairs(attributes: &[Attribute]) -> Vec<(&str, &str)> {
        attributes
            .iter()
            .map(|a| (a.trait_type.as_str(), a.value.as_str()))
            .collect()
    }

    #[test]
    fn test_scanned_legendary_hit() {
        let asset = ScannedAsset::parse("Common/164.png").unwrap();
        let attributes = scanned_attributes(&asset, &LegendaryTable::default());
        assert_eq!(
            pairs(&attributes),
            vec![("Rarity", "Common"), ("Legendary", "Pokémon")]
        );
    }

    #[test]
    fn test_scanned_legendary_miss() {
        let asset = ScannedAsset::parse("Common/999.png").unwrap();
        let attributes = scanned_attributes(&asset, &LegendaryTable::default());
        assert_eq!(
            pairs(&attributes),
            vec![("Rarity", "Common"), ("Legendary", "")]
        );
    }

    #[test]
    fn test_scanned_uses_injected_table() {
        let table: LegendaryTable = [("999.png", "Custom")].into_iter().collect();
        let asset = ScannedAsset::parse("Rare/999.png").unwrap();
        assert_eq!(scanned_attributes(&asset, &table)[1].value, "Custom");
    }

    #[test]
    fn test_manifest_attribute_order() {
        let line = ManifestLine {
            number: 1,
            text: "42.png\tRare\tSkull\tHat\tFire".to_string(),
        };
        let asset = ManifestAsset::parse(&line, "traits.txt").unwrap();
        assert_eq!(
            pairs(&manifest_attributes(&asset)),
            vec![
                ("Rarity", "Rare"),
                ("Design", "Skull"),
                ("Accessory", "Hat"),
                ("Special", "Fire"),
            ]
        );
    }
}
