//! Filename to legendary trait lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Entries of the FlameStarter collection.
const FLAMESTARTER_LEGENDARIES: &[(&str, &str)] = &[
    ("164.png", "Pokémon"),
    ("75.png", "Bruce Lee"),
    ("50.png", "Rambo"),
    ("143.png", "Neo"),
    ("133.png", "Ironman"),
    ("30.png", "Anonymous"),
    ("169.png", "Jason Voorhees"),
];

/// Static mapping from image filename to a legendary label.
///
/// Configured through the `[legendary]` table:
///
/// ```toml
/// [legendary]
/// "164.png" = "Pokémon"
/// "75.png" = "Bruce Lee"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegendaryTable(FxHashMap<String, String>);

impl Default for LegendaryTable {
    fn default() -> Self {
        FLAMESTARTER_LEGENDARIES.iter().copied().collect()
    }
}

impl LegendaryTable {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self(FxHashMap::default())
    }

    /// Label for `filename`, or `""` when it is not legendary.
    #[inline]
    pub fn lookup(&self, filename: &str) -> &str {
        self.0.get(filename).map_or("", String::as_str)
    }

    /// Entries sorted by filename.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LegendaryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
