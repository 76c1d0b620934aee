//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/collection/images/Rare/  ← cwd
/// /home/user/collection/mintmeta.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Search upward from `start` for `config_name`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // First check if config_name is an absolute path
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand `~` and resolve a configured path against the project root.
pub fn resolve_from_root(root: &Path, path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        root.join(&path)
    } else {
        path
    };
    crate::utils::path::normalize_path(&full_path)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("images/Rare");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("mintmeta.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("mintmeta.toml")).unwrap();
        assert_eq!(found, dir.path().join("mintmeta.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_from(dir.path(), Path::new("no-such-config-file.toml")).is_none());
    }

    #[test]
    fn test_resolve_from_root() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_from_root(dir.path(), Path::new("metadata"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("metadata"));

        let absolute = resolve_from_root(dir.path(), Path::new("/nonexistent/elsewhere"));
        assert_eq!(absolute, PathBuf::from("/nonexistent/elsewhere"));
    }
}
