//! Minimal node scan over the token stream.
//!
//! This is not a template engine: the only structure the styleguide pipeline
//! needs is the location of `{% comment %}` blocks. Everything else maps to a
//! flat node. Inline `{# ... #}` comments are dropped at this level, as the
//! host engine's parser drops them.
//!
//! An unclosed `{% comment %}` swallows the rest of the file into its body
//! instead of failing; doc extraction must never raise on malformed input.

use super::lexer::Spanned;
use super::token::Token;

/// A flat template node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text
    Text(String),
    /// `{{ ... }}` tag
    Variable(String),
    /// Any block tag other than `comment`
    Block(String),
    /// `{% comment %} ... {% endcomment %}` with its inner tokens
    Comment(Vec<Token>),
}

/// Scan cooked tokens into nodes.
pub fn parse(tokens: &[Spanned]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut iter = tokens.iter();

    while let Some((token, _)) = iter.next() {
        match token {
            Token::Text(text) => nodes.push(Node::Text(text.clone())),
            Token::Variable(contents) => nodes.push(Node::Variable(contents.clone())),
            Token::Comment(_) => {}
            Token::Block(contents) => {
                if token.block_name() == Some("comment") {
                    let mut body = Vec::new();
                    for (inner, _) in iter.by_ref() {
                        if inner.block_name() == Some("endcomment") {
                            break;
                        }
                        body.push(inner.clone());
                    }
                    nodes.push(Node::Comment(body));
                } else {
                    nodes.push(Node::Block(contents.clone()));
                }
            }
        }
    }

    nodes
}
