//! Run configuration.

use std::path::{Path, PathBuf};

/// Default name of the generated-output subdirectory excluded from
/// enumeration.
pub const DEFAULT_OUTPUT_DIR: &str = "_site";

/// Conversion settings, resolved once at startup and passed explicitly to
/// every component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source vault directory.
    pub root: PathBuf,

    /// Prefix substituted for the root directory in resolved link URLs.
    pub url_base: String,

    /// Files under a directory whose path contains this name are skipped
    /// during enumeration.
    pub output_dir_name: String,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, url_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_base: url_base.into(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }

    /// Root directory as a forward-slash string with a trailing slash.
    ///
    /// This is the prefix stripped from enumerated paths when deriving their
    /// root-relative form.
    pub fn root_prefix(&self) -> String {
        format!("{}/", normalize_path(&self.root).trim_end_matches('/'))
    }
}

/// Normalize a filesystem path to a forward-slash string.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
