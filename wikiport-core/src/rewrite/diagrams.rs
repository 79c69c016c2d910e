//! Mermaid fenced-block rewriting.

use regex::Regex;
use std::sync::OnceLock;

const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

static MERMAID_REGEX: OnceLock<Regex> = OnceLock::new();

fn mermaid_regex() -> &'static Regex {
    MERMAID_REGEX.get_or_init(|| Regex::new(r"(?s)```mermaid(?P<body>.*?)```").unwrap())
}

/// Replace every ```` ```mermaid ```` fenced block with a script tag loading
/// the renderer from a CDN plus a `<div class=mermaid>` wrapping the block's
/// inner text verbatim. The diagram source itself is not validated.
pub fn replace_mermaid_blocks(text: &str) -> String {
    let replacement =
        format!("<script src='{MERMAID_CDN}'></script><div class=mermaid>${{body}}</div>");
    mermaid_regex().replace_all(text, replacement).into_owned()
}
