//! Tokenizer and minimal node scan for Django-style template syntax.
//!
//! Tokenization is a two-stage pipeline: a raw logos pass over the source,
//! then a merge transformation that folds adjacent text fragments into single
//! `Text` tokens. The node scan on top of the token stream only knows enough
//! structure to find `{% comment %}` blocks; everything else passes through
//! untouched.

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{tokenize, Spanned};
pub use parser::{parse, Node};
pub use token::Token;
