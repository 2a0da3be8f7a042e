//! Markdown frontmatter extraction.
//!
//! Lenient line-oriented YAML subset: `key: value` pairs between `---`
//! fences at the top of a document. Unknown keys are ignored, quoted
//! values are unquoted, and malformed input degrades to defaults rather
//! than an error.

use once_cell::sync::Lazy;
use regex::Regex;

static FRONTMATTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---").expect("valid frontmatter regex"));

/// Metadata recognized in a document's frontmatter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Display title. Empty when absent.
    pub title: String,
    /// Raw date text, kept verbatim for later normalization.
    pub date: Option<String>,
    /// Optional one-line summary.
    pub description: Option<String>,
}

/// Splits a document into its frontmatter block and body.
///
/// Returns `(Some(yaml), body)` when a leading `---` fence is closed by a
/// second `---` line, otherwise `(None, whole_input)`. An unterminated
/// fence is treated as ordinary body text.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    let Some(caps) = FRONTMATTER_RE.captures(trimmed) else {
        return (None, content);
    };
    let Some(fence) = caps.get(0) else {
        return (None, content);
    };

    let yaml = caps.get(1).map_or("", |m| m.as_str()).trim();
    let body = trimmed[fence.end()..].trim_start_matches('\n');
    (Some(yaml), body)
}

/// Parses a frontmatter YAML block into recognized fields.
///
/// Lines without a `:`, comment lines, and unknown keys are skipped.
pub fn parse_frontmatter(yaml: &str) -> Frontmatter {
    let mut meta = Frontmatter::default();

    for line in yaml.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };

        let value = unquote(value.trim());
        match key.trim() {
            "title" => meta.title = value,
            "date" => meta.date = non_empty(value),
            "description" => meta.description = non_empty(value),
            _ => {}
        }
    }

    meta
}

/// Parses a whole document into `(frontmatter, body)`.
///
/// Documents without a frontmatter block yield default metadata and the
/// full input as body.
pub fn parse_document(content: &str) -> (Frontmatter, String) {
    match split_frontmatter(content) {
        (Some(yaml), body) => (parse_frontmatter(yaml), body.to_string()),
        (None, body) => (Frontmatter::default(), body.to_string()),
    }
}

fn unquote(value: &str) -> String {
    let value = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            value
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })
        .unwrap_or(value);
    value.to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_document, parse_frontmatter, split_frontmatter};

    #[test]
    fn splits_fenced_frontmatter_from_body() {
        let doc = "---\ntitle: Morning\ndate: 2024-01-20\n---\n\n# Body\n";
        let (yaml, body) = split_frontmatter(doc);
        assert_eq!(yaml, Some("title: Morning\ndate: 2024-01-20"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn unterminated_fence_is_body_text() {
        let doc = "---\ntitle: Broken\nno closing fence";
        let (yaml, body) = split_frontmatter(doc);
        assert_eq!(yaml, None);
        assert_eq!(body, doc);
    }

    #[test]
    fn parses_known_keys_and_unquotes_values() {
        let meta = parse_frontmatter(
            "title: \"Quoted Title\"\ndate: '2024-03-05'\nauthor: ignored\n# comment",
        );
        assert_eq!(meta.title, "Quoted Title");
        assert_eq!(meta.date.as_deref(), Some("2024-03-05"));
        assert_eq!(meta.description, None);
    }

    #[test]
    fn document_without_frontmatter_keeps_whole_body() {
        let (meta, body) = parse_document("just a paragraph");
        assert_eq!(meta.title, "");
        assert_eq!(meta.date, None);
        assert_eq!(body, "just a paragraph");
    }

    #[test]
    fn empty_date_value_is_absent() {
        let meta = parse_frontmatter("title: X\ndate:");
        assert_eq!(meta.date, None);
    }
}
