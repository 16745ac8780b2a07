//! Ordered, index-addressable token sequence for one source file.

use std::ops::Index;

use crate::tokenizer::{self, TokenizeError};
use crate::tokens::{Token, TokenKind};

/// A mutable sequence of tokens representing one source file.
///
/// The stream is 0-indexed and mutable at arbitrary indices. Replacing a
/// token never changes the stream's length: rules simulate insertion and
/// deletion by widening or narrowing whitespace content at boundaries they
/// already located, so indices held by an in-flight scan stay valid.
///
/// Any replacement sets the dirty flag; "did this fix change anything" is
/// answered by [`TokenStream::is_changed`], never by a return value.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    changed: bool,
}

impl TokenStream {
    /// Tokenize raw source text into a stream.
    ///
    /// # Errors
    /// Returns an error if the source contains a byte sequence the lexer
    /// does not recognize.
    pub fn from_code(code: &str) -> Result<Self, TokenizeError> {
        Ok(Self::from_tokens(tokenizer::tokenize(code)?))
    }

    /// Build a stream from an already-lexed token list.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            changed: false,
        }
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Replace the token at `index`, marking the stream dirty.
    ///
    /// The stream length is unchanged by construction.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, token: Token) {
        self.tokens[index] = token;
        self.changed = true;
    }

    /// True iff the stream differs from its originally-parsed form.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// O(n) pre-filter: is any token of `kind` present?
    #[must_use]
    pub fn contains_kind(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|t| t.is_kind(kind))
    }

    /// Index of the next meaningful (non-whitespace, non-comment) token
    /// strictly after `index`, or `None` if the stream ends first.
    #[must_use]
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, t)| t.is_meaningful())
            .map(|(i, _)| i)
    }

    /// Index of the next token of `kind` strictly after `index`.
    #[must_use]
    pub fn next_of_kind(&self, index: usize, kind: TokenKind) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, t)| t.is_kind(kind))
            .map(|(i, _)| i)
    }

    /// Index of the next punctuation token with the given content strictly
    /// after `index`.
    #[must_use]
    pub fn next_punct(&self, index: usize, content: &str) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, t)| t.is_kind(TokenKind::Punct) && t.content() == content)
            .map(|(i, _)| i)
    }

    /// Serialize the stream back to source text.
    #[must_use]
    pub fn generate_code(&self) -> String {
        let mut code = String::with_capacity(self.tokens.iter().map(|t| t.content().len()).sum());
        for token in &self.tokens {
            code.push_str(token.content());
        }
        code
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
