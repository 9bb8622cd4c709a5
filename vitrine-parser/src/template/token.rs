//! Token definitions for Django-style template syntax.
//!
//! The raw tokens are defined using the logos derive macro. Tag-like tokens
//! (`{% %}`, `{{ }}`, `{# #}`) never span lines, matching the host engine's
//! lexer; text fragments may. The cooked [`Token`] carries the trimmed inner
//! contents of each tag.

use logos::Logos;

/// Raw lexical shapes recognized by the logos pass.
///
/// `Text` and `StrayBrace` are folded together into [`Token::Text`] by the
/// merge stage in [`super::lexer`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    /// `{% ... %}` block tag, single line
    #[regex(r"\{%([^%\n]|%[^}\n])*%\}")]
    Block,

    /// `{{ ... }}` variable tag, single line
    #[regex(r"\{\{([^}\n]|\}[^}\n])*\}\}")]
    Variable,

    /// `{# ... #}` inline comment, single line
    #[regex(r"\{#([^#\n]|#[^}\n])*#\}")]
    Comment,

    /// Literal text between tags
    #[regex(r"[^{]+")]
    Text,

    /// A `{` that does not open a tag
    #[token("{")]
    StrayBrace,
}

/// A cooked template token with its inner contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal text, verbatim
    Text(String),
    /// Contents of a `{{ ... }}` tag, trimmed
    Variable(String),
    /// Contents of a `{% ... %}` tag, trimmed
    Block(String),
    /// Contents of a `{# ... #}` comment, trimmed
    Comment(String),
}

impl Token {
    /// The inner contents of the token.
    pub fn contents(&self) -> &str {
        match self {
            Token::Text(s) | Token::Variable(s) | Token::Block(s) | Token::Comment(s) => s,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment(_))
    }

    /// First word of a block tag's contents, e.g. `comment` for
    /// `{% comment %}`. `None` for non-block tokens and empty blocks.
    pub fn block_name(&self) -> Option<&str> {
        match self {
            Token::Block(contents) => contents.split_whitespace().next(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents() {
        assert_eq!(Token::Text("hello".to_string()).contents(), "hello");
        assert_eq!(Token::Block("comment".to_string()).contents(), "comment");
    }

    #[test]
    fn test_block_name() {
        assert_eq!(
            Token::Block("include \"foo.html\"".to_string()).block_name(),
            Some("include")
        );
        assert_eq!(Token::Block("".to_string()).block_name(), None);
        assert_eq!(Token::Text("comment".to_string()).block_name(), None);
        assert_eq!(Token::Comment("comment".to_string()).block_name(), None);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Text("x".to_string()).is_text());
        assert!(!Token::Block("x".to_string()).is_text());

        assert!(Token::Comment("x".to_string()).is_comment());
        assert!(!Token::Variable("x".to_string()).is_comment());
    }
}
