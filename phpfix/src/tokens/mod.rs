//! Token model shared by the tokenizer, the fixer rules, and the harness.
//!
//! A [`Token`] is the smallest lexical unit of a source file: a closed kind
//! tag plus its literal text. Tokens do not know their own position; position
//! is an index inside a [`TokenStream`].

mod stream;

pub use stream::TokenStream;

use compact_str::CompactString;

/// Closed enumeration of lexical token kinds.
///
/// The set is deliberately exhaustive for the PHP subset the rules operate
/// on, so rule code can match on kinds instead of probing content strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<?php` open tag.
    OpenTag,
    /// A run of spaces, tabs, and newlines.
    Whitespace,
    /// `//`, `#`, or `/* ... */` comment.
    Comment,
    /// `/** ... */` documentation comment.
    DocComment,
    /// `#[` attribute opener.
    AttributeStart,
    /// `class` keyword.
    Class,
    /// `function` keyword.
    Function,
    /// `public` visibility keyword.
    Public,
    /// `protected` visibility keyword.
    Protected,
    /// `private` visibility keyword.
    Private,
    /// `public` on a constructor-promoted parameter.
    PromotedPublic,
    /// `protected` on a constructor-promoted parameter.
    PromotedProtected,
    /// `private` on a constructor-promoted parameter.
    PromotedPrivate,
    /// `readonly` keyword.
    Readonly,
    /// `$name` variable.
    Variable,
    /// Identifier or other bare word.
    Identifier,
    /// Single- or double-quoted string literal.
    StringLiteral,
    /// Integer or float literal.
    Number,
    /// Single punctuation character; `content` holds which one.
    Punct,
}

impl TokenKind {
    /// Whitespace and comments carry no syntactic meaning for the rules.
    #[must_use]
    pub fn is_meaningful(self) -> bool {
        !matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Check if this kind is a constructor-promotion visibility marker.
    #[must_use]
    pub fn is_promotion(self) -> bool {
        matches!(
            self,
            TokenKind::PromotedPublic | TokenKind::PromotedProtected | TokenKind::PromotedPrivate
        )
    }
}

/// A single lexical token: kind tag plus literal content.
///
/// Equality is structural (kind and content both match), which is what the
/// harness relies on when comparing a fixed stream against the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    content: CompactString,
}

impl Token {
    /// Create a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, content: impl Into<CompactString>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// The kind tag.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The literal source text of this token.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check the kind tag.
    #[must_use]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Whitespace and comments are not meaningful to rule scans.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        self.kind.is_meaningful()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        let a = Token::new(TokenKind::Punct, ",");
        let b = Token::new(TokenKind::Punct, ",");
        let c = Token::new(TokenKind::Punct, ";");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Token::new(TokenKind::Identifier, ","));
    }

    #[test]
    fn meaningful_kinds() {
        assert!(!TokenKind::Whitespace.is_meaningful());
        assert!(!TokenKind::Comment.is_meaningful());
        assert!(!TokenKind::DocComment.is_meaningful());
        assert!(TokenKind::AttributeStart.is_meaningful());
        assert!(TokenKind::PromotedPublic.is_meaningful());
    }

    #[test]
    fn promotion_kinds() {
        assert!(TokenKind::PromotedPublic.is_promotion());
        assert!(TokenKind::PromotedPrivate.is_promotion());
        assert!(!TokenKind::Public.is_promotion());
    }
}
