//! Lexer for the PHP subset the fixer rules operate on.
//!
//! Tokenization happens in two layers. A logos-derived raw lexer splits the
//! source into kind-tagged slices. A classification pass then walks the raw
//! tokens and re-tags visibility keywords that sit inside a `__construct`
//! parameter list as constructor-promotion markers, since that distinction
//! is contextual and cannot be expressed in the lexer grammar.

use logos::Logos;
use thiserror::Error;

use crate::tokens::{Token, TokenKind};

/// Error produced when the lexer cannot recognize part of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The input contains a byte sequence outside the supported grammar.
    #[error("unrecognized input at byte offset {offset}")]
    UnexpectedInput {
        /// Byte offset of the first unrecognized character.
        offset: usize,
    },
}

/// Raw lexical classes produced by the logos lexer.
///
/// Keyword variants use `#[token]` so they outrank the identifier regex on
/// equal-length matches. `AttributeStart` outranks the `#` line comment
/// because it is the longer match; the comment pattern refuses `[` as its
/// first body character so `#[` never lexes as a comment.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[token("<?php")]
    OpenTag,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // `//...` and `#...` line comments plus `/* ... */` block comments.
    #[regex(r"//[^\n]*")]
    #[regex(r"#([^\[\n][^\n]*)?")]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 5)]
    Comment,

    #[regex(r"/\*\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 10)]
    DocComment,

    #[token("#[")]
    AttributeStart,

    #[token("class")]
    Class,

    #[token("function")]
    Function,

    #[token("public")]
    Public,

    #[token("protected")]
    Protected,

    #[token("private")]
    Private,

    #[token("readonly")]
    Readonly,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    StringLiteral,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?")]
    Number,

    #[regex(r"[{}()\[\],;:?!=<>+*/%.\\&|@^~$-]")]
    Punct,
}

impl From<RawKind> for TokenKind {
    fn from(raw: RawKind) -> Self {
        match raw {
            RawKind::OpenTag => TokenKind::OpenTag,
            RawKind::Whitespace => TokenKind::Whitespace,
            RawKind::Comment => TokenKind::Comment,
            RawKind::DocComment => TokenKind::DocComment,
            RawKind::AttributeStart => TokenKind::AttributeStart,
            RawKind::Class => TokenKind::Class,
            RawKind::Function => TokenKind::Function,
            RawKind::Public => TokenKind::Public,
            RawKind::Protected => TokenKind::Protected,
            RawKind::Private => TokenKind::Private,
            RawKind::Readonly => TokenKind::Readonly,
            RawKind::Variable => TokenKind::Variable,
            RawKind::Identifier => TokenKind::Identifier,
            RawKind::StringLiteral => TokenKind::StringLiteral,
            RawKind::Number => TokenKind::Number,
            RawKind::Punct => TokenKind::Punct,
        }
    }
}

/// Tokenize raw source text.
///
/// # Errors
/// Returns [`TokenizeError::UnexpectedInput`] when the source contains a
/// byte sequence outside the supported grammar.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = RawKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let raw = result.map_err(|()| TokenizeError::UnexpectedInput {
            offset: lexer.span().start,
        })?;
        tokens.push(Token::new(TokenKind::from(raw), lexer.slice()));
    }

    classify_promotions(&mut tokens);
    Ok(tokens)
}

/// Re-tag visibility keywords inside `__construct(...)` parameter lists as
/// constructor-promotion markers.
fn classify_promotions(tokens: &mut [Token]) {
    let mut index = 0;
    while index < tokens.len() {
        if tokens[index].is_kind(TokenKind::Function) {
            if let Some(after) = constructor_open_paren(tokens, index) {
                index = retag_parameter_list(tokens, after);
                continue;
            }
        }
        index += 1;
    }
}

/// If `function` at `index` declares `__construct`, return the index of the
/// opening parenthesis of its parameter list.
fn constructor_open_paren(tokens: &[Token], index: usize) -> Option<usize> {
    let name = next_meaningful(tokens, index)?;
    if !tokens[name].is_kind(TokenKind::Identifier)
        || !tokens[name].content().eq_ignore_ascii_case("__construct")
    {
        return None;
    }
    let open = next_meaningful(tokens, name)?;
    (tokens[open].is_kind(TokenKind::Punct) && tokens[open].content() == "(").then_some(open)
}

/// Walk a parameter list starting after its opening parenthesis, re-tagging
/// visibility keywords until the matching close. Attribute arguments may
/// contain nested parentheses, so depth is tracked. Returns the index just
/// past the last token examined.
fn retag_parameter_list(tokens: &mut [Token], open: usize) -> usize {
    let mut depth = 1usize;
    let mut index = open + 1;
    while index < tokens.len() && depth > 0 {
        match tokens[index].kind() {
            TokenKind::Punct if tokens[index].content() == "(" => depth += 1,
            TokenKind::Punct if tokens[index].content() == ")" => depth -= 1,
            TokenKind::Public => {
                tokens[index] = Token::new(TokenKind::PromotedPublic, "public");
            }
            TokenKind::Protected => {
                tokens[index] = Token::new(TokenKind::PromotedProtected, "protected");
            }
            TokenKind::Private => {
                tokens[index] = Token::new(TokenKind::PromotedPrivate, "private");
            }
            _ => {}
        }
        index += 1;
    }
    index
}

fn next_meaningful(tokens: &[Token], index: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, t)| t.is_meaningful())
        .map(|(i, _)| i)
}
