//! Path utilities.
//!
//! Pure functions for path manipulation.

mod fs;

pub use fs::normalize_path;
