//! Parser for the `@tag` doc mini-syntax.
//!
//! A doc string is a flat sequence of tagged lines:
//!
//!     @doc
//!     @name layout area
//!     @description Nothing more than an area.
//!         Continuation lines keep their indentation
//!         and are joined with newlines.
//!
//! There is no nesting and no failure mode: unrecognized lines are dropped,
//! absent tags are simply missing keys.

use indexmap::IndexMap;

/// Ordered tag -> body mapping, in source order.
pub type DocMap = IndexMap<String, String>;

/// Parse a raw doc string into its tag mapping.
///
/// Lines are classified on their trimmed form. A leading `@doc` marker and
/// blank lines are skipped; `@tag body` opens a new tag; any other line is a
/// continuation of the open tag, appended with a newline separator and its
/// leading whitespace intact. Continuation lines with no open tag are
/// silently dropped.
pub fn parse_doc(doc: &str) -> DocMap {
    let mut tags = DocMap::new();
    let mut current: Option<String> = None;

    for line in doc.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("@doc") {
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('@') {
            let mut parts = rest.splitn(2, ' ');
            let tag = parts.next().unwrap_or("").to_string();
            let body = parts.next().unwrap_or("").trim().to_string();
            tags.insert(tag.clone(), body);
            current = Some(tag);
        } else if let Some(tag) = current.as_ref().and_then(|t| tags.get_mut(t)) {
            if !tag.is_empty() {
                tag.push('\n');
            }
            tag.push_str(line.trim_end());
        }
    }

    tags
}
