//! Tokenization pipeline for template source.
//!
//! Two stages:
//!
//! 1. Raw pass using the logos lexer. Every byte of the source lands in some
//!    raw token; a `{` that opens no tag becomes a `StrayBrace`.
//! 2. Merge transformation. Adjacent `Text`/`StrayBrace` fragments are folded
//!    into single [`Token::Text`] tokens, and tag tokens are cooked down to
//!    their trimmed inner contents.
//!
//! Spans are byte ranges into the source and survive the merge stage, so
//! tooling can always map a token back to its origin.

use std::ops::Range;

use logos::Logos;

use super::token::{RawToken, Token};

/// A cooked token together with its byte span in the source.
pub type Spanned = (Token, Range<usize>);

/// Tokenize template source into cooked tokens.
pub fn tokenize(source: &str) -> Vec<Spanned> {
    merge_text(raw_pass(source), source)
}

/// Raw logos pass. Lexer errors are demoted to text fragments so that
/// tokenization never fails on arbitrary input.
fn raw_pass(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let raw = result.unwrap_or(RawToken::Text);
        out.push((raw, lexer.span()));
    }
    out
}

/// Fold adjacent text fragments and cook tag tokens.
fn merge_text(raw: Vec<(RawToken, Range<usize>)>, source: &str) -> Vec<Spanned> {
    let mut out: Vec<Spanned> = Vec::new();
    let mut pending: Option<Range<usize>> = None;

    for (kind, span) in raw {
        match kind {
            RawToken::Text | RawToken::StrayBrace => {
                pending = match pending {
                    Some(acc) => Some(acc.start..span.end),
                    None => Some(span),
                };
            }
            _ => {
                if let Some(acc) = pending.take() {
                    out.push((Token::Text(source[acc.clone()].to_string()), acc));
                }
                let inner = source[span.start + 2..span.end - 2].trim().to_string();
                let token = match kind {
                    RawToken::Block => Token::Block(inner),
                    RawToken::Variable => Token::Variable(inner),
                    RawToken::Comment => Token::Comment(inner),
                    RawToken::Text | RawToken::StrayBrace => unreachable!(),
                };
                out.push((token, span));
            }
        }
    }

    if let Some(acc) = pending {
        out.push((Token::Text(source[acc.clone()].to_string()), acc));
    }

    out
}
