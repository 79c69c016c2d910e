//! Callout blockquote rewriting.
//!
//! Obsidian-style callouts (`> [!NOTE]`, `> [!WARNING]`, …) are rewritten
//! into labelled `<div class="code-example">` containers that Jekyll-style
//! themes render as styled boxes.

use regex::Regex;
use std::sync::OnceLock;

static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();
static WARNING_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_regex() -> &'static Regex {
    NOTE_REGEX.get_or_init(|| Regex::new(r"(?ms)^> \[!(?:NOTE|INFO)\].*?\n\n").unwrap())
}

fn warning_regex() -> &'static Regex {
    // WARNING must come before WARN so the longer marker wins.
    WARNING_REGEX.get_or_init(|| Regex::new(r"(?ms)^> \[!(?:WARNING|WARN)\].*?\n\n").unwrap())
}

/// Rewrite note-like callouts (`[!NOTE]`, `[!INFO]`), then warning-like ones
/// (`[!WARNING]`, `[!WARN]`). The two passes are independent; each scans the
/// buffer it receives and blocks not matching either marker set are left
/// as-is.
pub fn replace_callouts(text: &str) -> String {
    let noted = apply_pass(
        text,
        note_regex(),
        &["[!NOTE]", "[!INFO]"],
        "📝 Note",
        "blue",
    );
    apply_pass(
        &noted,
        warning_regex(),
        &["[!WARNING]", "[!WARN]"],
        "⚠ Warning",
        "yellow",
    )
}

/// One marker-set pass. Matches are found against the buffer as it stood at
/// the start of the pass, then applied as literal substring replacements on
/// an accumulating buffer; spans are disjoint, so earlier replacements never
/// corrupt later matches.
fn apply_pass(text: &str, regex: &Regex, markers: &[&str], label: &str, color: &str) -> String {
    let mut result = text.to_string();

    for mat in regex.find_iter(text) {
        let span = mat.as_str();
        let cleaned = strip_quoting(span, markers);
        let replacement = format!(
            "<div class=\"code-example\" markdown=\"1\">\n{label}\n{{: .label .label-{color} }}\n{cleaned}\n</div>\n\n"
        );

        tracing::debug!(span, label, "rewrote callout");
        result = result.replace(span, &replacement);
    }

    result
}

/// Drop the `[!…]` marker and every leading `> ` / `>` quote prefix from
/// each line of the matched span.
fn strip_quoting(span: &str, markers: &[&str]) -> String {
    span.split('\n')
        .enumerate()
        .map(|(i, raw)| {
            let mut line = raw;
            while let Some(rest) = line.strip_prefix("> ").or_else(|| line.strip_prefix('>')) {
                line = rest;
            }
            if i == 0 {
                for marker in markers {
                    if let Some(rest) = line.strip_prefix(marker) {
                        line = rest;
                        break;
                    }
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
