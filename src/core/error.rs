//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while enumerating, assigning or writing assets.
///
/// Every variant aborts the run. There are no retries.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed record at {origin}: {reason}")]
    Format { origin: String, reason: String },

    #[error("found {found} source records, the collection needs {required}")]
    InsufficientData { required: usize, found: usize },

    #[error("ordinal #{0} was already written in this run")]
    DuplicateOrdinal(usize),

    #[error("failed to serialize metadata")]
    Json(#[from] serde_json::Error),

    #[error("failed to write asset #{ordinal} ({identifier})")]
    Asset {
        ordinal: usize,
        identifier: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io(path.into(), err)
    }

    pub fn format(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Attach the failing ordinal to an error raised while writing it.
    pub fn at_ordinal(self, ordinal: usize, identifier: &str) -> Self {
        Self::Asset {
            ordinal,
            identifier: identifier.to_string(),
            source: Box::new(self),
        }
    }

    /// Ordinal of the asset that failed, if the error happened while writing.
    #[cfg(test)]
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Self::Asset { ordinal, .. } => Some(*ordinal),
            _ => None,
        }
    }
}
