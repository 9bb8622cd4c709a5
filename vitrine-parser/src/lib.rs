//! Template tokenizer and doc-comment parser for vitrine.
//!
//! This crate holds the syntactic half of the styleguide pipeline: turning a
//! template file into tokens, locating its leading comment node, and parsing
//! the `@tag` doc mini-syntax found inside it into an ordered mapping.
//!
//! The crates above this one (discovery, aggregation, rendering) only consume
//! two entry points:
//!
//! - [`doc::extract_doc`] / [`doc::extract_doc_from_file`] - raw doc string
//!   out of a template, or `""` when the template carries none.
//! - [`doc::parse_doc`] - doc string into a [`doc::DocMap`].

pub mod doc;
pub mod template;

pub use doc::{extract_doc, extract_doc_from_file, parse_doc, DocMap};
