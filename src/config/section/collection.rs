//! `[collection]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [collection]
//! size = 177                  # Number of records to generate
//! name = "FlameStarter"       # Display name prefix: "FlameStarter #1"
//! base_uri = "ipfs://<cid>/"  # Content-addressed root of the image tree
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Default collection size.
pub const DEFAULT_SIZE: usize = 177;

/// Default content-addressed image root.
pub const DEFAULT_BASE_URI: &str =
    "ipfs://bafybeihmnzln7owlnyo7s6cjtca66d35s3bl522yfx5tjnn3j7z6ol4aiy/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Collection size `N`. Ordinals run from 1 to `N`.
    pub size: usize,

    /// Display name prefix.
    pub name: String,

    /// Base URI prepended to `<category>/<filename>`.
    pub base_uri: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            name: "FlameStarter".to_string(),
            base_uri: DEFAULT_BASE_URI.to_string(),
        }
    }
}

impl CollectionConfig {
    pub const SIZE: FieldPath = FieldPath::new("collection.size");
    pub const NAME: FieldPath = FieldPath::new("collection.name");
    pub const BASE_URI: FieldPath = FieldPath::new("collection.base_uri");

    /// Validate collection settings.
    ///
    /// # Checks
    /// - `size` is at least 1
    /// - `name` is not blank
    /// - `base_uri` parses as a URL and ends with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.size == 0 {
            diag.error(Self::SIZE, "collection size must be at least 1");
        }

        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "collection name must not be empty");
        }

        if let Err(e) = url::Url::parse(&self.base_uri) {
            diag.error_with_hint(
                Self::BASE_URI,
                format!("invalid base URI `{}`: {}", self.base_uri, e),
                "use a full URI such as \"ipfs://<cid>/\"",
            );
        } else if !self.base_uri.ends_with('/') {
            diag.error_with_hint(
                Self::BASE_URI,
                format!("base URI `{}` must end with `/`", self.base_uri),
                format!("base_uri = \"{}/\"", self.base_uri),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(config: &CollectionConfig) -> Vec<&'static str> {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(errors_for(&CollectionConfig::default()).is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = CollectionConfig {
            size: 0,
            ..Default::default()
        };
        assert_eq!(errors_for(&config), vec!["collection.size"]);
    }

    #[test]
    fn test_base_uri_needs_trailing_slash() {
        let config = CollectionConfig {
            base_uri: "ipfs://bafy".to_string(),
            ..Default::default()
        };
        assert_eq!(errors_for(&config), vec!["collection.base_uri"]);
    }

    #[test]
    fn test_base_uri_must_parse() {
        let config = CollectionConfig {
            base_uri: "not a uri/".to_string(),
            name: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            errors_for(&config),
            vec!["collection.name", "collection.base_uri"]
        );
    }
}
