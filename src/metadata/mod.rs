//! Metadata records and their on-disk storage.

mod record;
mod write;

pub use record::{Attribute, MetadataRecord, image_uri};
pub use write::{MetadataWriter, read_record, storage_key};
