//! Wiki-link resolution for `[[target]]`, `[[target|label]]` and
//! `[[target#anchor]]` syntax.

use crate::config::Config;
use regex::Regex;
use std::sync::OnceLock;

static WIKI_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn wiki_link_regex() -> &'static Regex {
    WIKI_LINK_REGEX.get_or_init(|| Regex::new(r"\[\[(?P<target>.*?)\]\]").unwrap())
}

/// Replace every resolvable wiki-link token with a relative markdown link.
///
/// A token resolves when its bare name plus `.md` equals either the
/// root-relative form or the bare filename of a known path. The resolved URL
/// is the matched path with the root prefix swapped for the configured URL
/// base and the `.md` extension removed. Unresolved tokens pass through
/// byte-for-byte.
pub fn resolve_links(text: &str, paths: &[String], config: &Config) -> String {
    let root_prefix = config.root_prefix();
    let mut output = text.to_string();

    for caps in wiki_link_regex().captures_iter(text) {
        let token = caps.get(0).map_or("", |m| m.as_str());
        let target = caps.name("target").map_or("", |m| m.as_str());

        // Label: everything after the first `|`, whole target when absent.
        let (name_part, label) = match target.split_once('|') {
            Some((name, label)) => (name, label),
            None => (target, target),
        };

        // Anchor: the segment between the first and second `#`, backslashes
        // stripped.
        let (bare_name, anchor) = match name_part.split_once('#') {
            Some((name, rest)) => {
                let fragment = rest.split('#').next().unwrap_or(rest);
                (name, format!("#{}", fragment.replace('\\', "")))
            }
            None => (name_part, String::new()),
        };

        tracing::info!(token, bare_name, label, "wiki link");

        // Scan the whole list without breaking: when several paths share a
        // bare filename, the last entry in list order wins.
        let wanted = format!("{bare_name}.md");
        let mut resolved: Option<&str> = None;
        for path in paths {
            let filename = path.rsplit('/').next().unwrap_or(path);
            let relative = path.strip_prefix(&root_prefix).unwrap_or(path);
            if relative == wanted || filename == wanted {
                resolved = Some(path.as_str());
            }
        }

        match resolved {
            Some(path) => {
                let display = label.rsplit('/').next().unwrap_or(label);
                let relative = path.strip_prefix(&root_prefix).unwrap_or(path);
                let relative = relative.strip_suffix(".md").unwrap_or(relative);
                let replacement =
                    format!("[{display}]({}/{relative}{anchor})", config.url_base);

                tracing::info!(path, %replacement, "resolved");
                output = output.replace(token, &replacement);
            }
            None => tracing::info!(token, "no matching document, left unchanged"),
        }
    }

    output
}
