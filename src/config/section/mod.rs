//! Configuration section definitions.
//!
//! Each module corresponds to a section in `mintmeta.toml`:
//!
//! | Module       | TOML Section     | Purpose                                |
//! |--------------|------------------|----------------------------------------|
//! | `collection` | `[collection]`   | Size, display name, base URI           |
//! | `source`     | `[source]`       | Strategy, manifest, image root, seed   |
//! | `output`     | `[output]`       | Metadata directory, progress log       |
//!
//! The `[legendary]` table is [`crate::asset::LegendaryTable`].

mod collection;
mod output;
mod source;

pub use collection::CollectionConfig;
pub use output::OutputConfig;
pub use source::{SourceConfig, Strategy};
