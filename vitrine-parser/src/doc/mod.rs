//! Doc-comment extraction and the `@tag` mini-syntax parser.

pub mod extract;
pub mod parse;

pub use extract::{extract_doc, extract_doc_from_file, ExtractError};
pub use parse::{parse_doc, DocMap};
