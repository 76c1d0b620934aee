//! Asset scanning functions (pure, no side effects).

use std::fs;
use std::io;
use std::path::{Component, Path};

use jwalk::WalkDir;

use crate::core::PipelineError;

/// Scan an asset root for image files
///
/// Returns every non-directory entry below `root` as a path relative to
/// `root`, joined with `/` on every platform
///
/// ```text
/// images/
/// ├── Common/
/// │   ├── 164.png     -> "Common/164.png"
/// │   └── 999.png     -> "Common/999.png"
/// └── Rare/
///     └── 42.png      -> "Rare/42.png"
/// ```
///
/// # Ordering
///
/// Directory enumeration order differs between platforms, so the result
/// is sorted lexically by relative path. Ordinal assignment in the
/// directory pipeline follows this order.
///
/// Hidden entries are scanned like any other file, so a dot-named image
/// keeps its ordinal.
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
pub fn scan_assets(root: &Path) -> Result<Vec<String>, PipelineError> {
    let meta = fs::metadata(root).map_err(|err| PipelineError::io(root, err))?;
    if !meta.is_dir() {
        return Err(PipelineError::io(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "asset root is not a directory"),
        ));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).skip_hidden(false) {
        let entry = entry.map_err(|err| PipelineError::io(root, io::Error::other(err)))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(&path);
        paths.push(to_slash_path(rel));
    }

    paths.sort();
    Ok(paths)
}

/// Join the normal components of a relative path with `/`
fn to_slash_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
