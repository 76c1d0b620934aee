//! Core types - pure abstractions shared across the codebase.

mod error;
mod phase;

pub use error::PipelineError;
pub use phase::Phase;
