//! Doc-string extraction from template source.
//!
//! The doc string of a template is the text sitting directly inside its first
//! `{% comment %}` block:
//!
//!     {% comment %}
//!     @doc
//!     @name page header
//!     @description The main header, used on every page
//!     {% endcomment %}
//!     <header>...</header>
//!
//! Extraction is a pure read; templates without a comment block yield `""`.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::template::{parse, tokenize, Node};

/// Error that can occur when extracting from a file
#[derive(Debug, Clone)]
pub enum ExtractError {
    /// IO error when reading the template file
    Io(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err.to_string())
    }
}

/// Extract the raw doc string from template source.
///
/// Returns the trimmed text token immediately following the first
/// `{% comment %}` tag, or `""` when the template has no comment node, the
/// block is empty, or the block does not start with text.
pub fn extract_doc(source: &str) -> String {
    let tokens = tokenize(source);
    for node in parse(&tokens) {
        if let Node::Comment(body) = node {
            return match body.first() {
                Some(token) if token.is_text() => token.contents().trim().to_string(),
                _ => String::new(),
            };
        }
    }
    String::new()
}

/// Extract the raw doc string from a template file.
///
/// Unreadable files propagate as [`ExtractError::Io`]; they are not treated
/// as templates without docs.
pub fn extract_doc_from_file<P: AsRef<Path>>(path: P) -> Result<String, ExtractError> {
    let source = fs::read_to_string(path)?;
    Ok(extract_doc(&source))
}
