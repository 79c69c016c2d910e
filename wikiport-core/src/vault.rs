//! Vault snapshot enumeration.

use crate::config::{normalize_path, Config};
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Failed to walk vault: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Collect every file path under the vault root.
///
/// Paths are normalized to forward slashes and keep the root prefix. Files
/// whose directory component contains the configured output directory name
/// are skipped, at any nesting depth.
///
/// The result is sorted in descending lexicographic order. The ordering
/// carries no meaning of its own, but the link resolver's last-match-wins
/// scan depends on it staying stable across runs.
pub fn collect_document_paths(config: &Config) -> Result<Vec<String>, VaultError> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let dir = entry.path().parent().unwrap_or_else(|| Path::new(""));
        if normalize_path(dir).contains(&config.output_dir_name) {
            continue;
        }

        paths.push(normalize_path(entry.path()));
    }

    paths.sort_by(|a, b| b.cmp(a));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collects_all_files_reverse_sorted() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("alpha.md"));
        touch(&dir.path().join("zeta.md"));
        touch(&dir.path().join("sub/beta.md"));
        touch(&dir.path().join("notes.txt"));

        let config = Config::new(dir.path(), "");
        let paths = collect_document_paths(&config).unwrap();

        assert_eq!(paths.len(), 4);
        let mut sorted = paths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(paths, sorted);
        assert!(paths.iter().any(|p| p.ends_with("notes.txt")));
    }

    #[test]
    fn test_excludes_output_directory_at_any_depth() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("kept.md"));
        touch(&dir.path().join("_site/skipped.md"));
        touch(&dir.path().join("nested/deep/_site/also/skipped.md"));

        let config = Config::new(dir.path(), "");
        let paths = collect_document_paths(&config).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("kept.md"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let config = Config::new("/nonexistent/wikiport-test-root", "");
        assert!(collect_document_paths(&config).is_err());
    }

    #[test]
    fn test_paths_use_forward_slashes() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("sub/page.md"));

        let config = Config::new(dir.path(), "");
        let paths = collect_document_paths(&config).unwrap();

        assert!(paths[0].contains("sub/page.md"));
        assert!(!paths[0].contains('\\'));
    }
}
