//! Pipeline phases for a single generation run.

use std::fmt;

/// Phase of a generation run.
///
/// A run only moves forward: `Enumerating -> Assigning -> Writing -> Done`.
/// A fresh run starts again from `Enumerating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Collecting exactly `N` source records.
    Enumerating,
    /// Permuting records to decouple ordinals from source order.
    Assigning,
    /// Deriving attributes and writing one record per ordinal.
    Writing,
    /// Terminal.
    Done,
}

impl Phase {
    /// The phase that follows this one. `Done` stays `Done`.
    pub const fn next(self) -> Self {
        match self {
            Self::Enumerating => Self::Assigning,
            Self::Assigning => Self::Writing,
            Self::Writing | Self::Done => Self::Done,
        }
    }

    #[cfg(test)]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enumerating => "enumerating",
            Self::Assigning => "assigning",
            Self::Writing => "writing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}
