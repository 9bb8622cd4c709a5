//! Display-name and id formatting for files and folders.

use once_cell::sync::Lazy;
use regex::Regex;

// Exactly two digits and a hyphen; "0-", "0x-" and friends stay untouched.
static ORDER_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-").expect("valid regex"));

/// Format a file or folder name for display.
///
/// Strips a leading `NN-` ordering prefix, truncates at the first occurrence
/// of the template extension, and turns underscores into spaces.
pub fn format_file_name(file_name: &str, extension: &str) -> String {
    let stripped = ORDER_PREFIX_RE.replace(file_name, "");
    let stripped: &str = stripped.as_ref();
    let end = match (!extension.is_empty()).then(|| stripped.find(extension)).flatten() {
        Some(at) => at,
        None => stripped.len(),
    };
    stripped[..end].replace('_', " ")
}

/// Format a file or folder name into a string usable as an HTML id.
pub fn format_file_id(file_name: &str, extension: &str) -> String {
    format_file_name(file_name, extension).replace(' ', "-")
}
