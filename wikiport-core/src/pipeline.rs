//! Per-file conversion pipeline.

use crate::config::Config;
use crate::rewrite::{callouts, diagrams, links};
use crate::vault::{self, VaultError};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),
}

static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn comment_regex() -> &'static Regex {
    // `.` stays line-bound, so a `%%` pair never strips across lines.
    COMMENT_REGEX.get_or_init(|| Regex::new(r"%%.*%%").unwrap())
}

/// Drives the conversion: one enumeration pass over the vault, then an
/// in-place rewrite of every markdown file.
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert every markdown file under the configured root.
    ///
    /// The path snapshot is taken once; non-markdown files participate in
    /// link resolution but are never rewritten. Returns the number of files
    /// rewritten.
    pub fn run(&self) -> Result<usize, ConvertError> {
        let paths = vault::collect_document_paths(&self.config)?;
        tracing::info!("Found {} files under {:?}", paths.len(), self.config.root);

        let mut converted = 0;
        for path in &paths {
            if !path.ends_with(".md") {
                continue;
            }

            let span = tracing::info_span!("convert", path = %path);
            let _guard = span.enter();

            let text = read_document(Path::new(path))?;
            let text = links::resolve_links(&text, &paths, &self.config);
            let text = diagrams::replace_mermaid_blocks(&text);
            let text = callouts::replace_callouts(&text);
            write_document(Path::new(path), &text)?;
            converted += 1;
        }

        tracing::info!("✓ Converted {} files", converted);
        Ok(converted)
    }
}

/// Read a document, stripping `%%…%%` comment spans.
fn read_document(path: &Path) -> Result<String, std::io::Error> {
    let raw = fs::read_to_string(path)?;
    Ok(comment_regex().replace_all(&raw, "").into_owned())
}

/// Overwrite a document atomically: write a `.tmp` sibling, then rename it
/// over the original, so an interrupted run never loses the source file.
fn write_document(path: &Path, text: &str) -> Result<(), std::io::Error> {
    let temp_path = path.with_extension("md.tmp");
    fs::write(&temp_path, text)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_spans_stripped() {
        let stripped = comment_regex().replace_all("keep %%drop%% keep", "");
        assert_eq!(stripped, "keep  keep");
    }

    #[test]
    fn test_comment_strip_is_greedy_within_a_line() {
        let stripped = comment_regex().replace_all("a %%x%% b %%y%% c", "");
        assert_eq!(stripped, "a  c");
    }

    #[test]
    fn test_comment_marker_does_not_span_lines() {
        let text = "open %%\nstill here\n%% close";
        let stripped = comment_regex().replace_all(text, "");
        assert_eq!(stripped, text);
    }
}
