//! Pluggable syntax validation used by the verification harness.
//!
//! Rules themselves never validate syntax; the harness re-checks fixed
//! output through this seam so the core logic has zero dependency on how
//! validation is performed.

use thiserror::Error;

use crate::tokenizer::{self, TokenizeError};
use crate::tokens::TokenKind;

/// Error reported when a source string fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    /// The source could not be tokenized at all.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// A closing delimiter appeared without a matching opener.
    #[error("unmatched closing `{delimiter}` at token index {index}")]
    UnmatchedClose {
        /// The offending delimiter.
        delimiter: char,
        /// Stream index of the offending token.
        index: usize,
    },
    /// An opening delimiter was never closed.
    #[error("unclosed `{delimiter}` opened at token index {index}")]
    Unclosed {
        /// The unclosed delimiter.
        delimiter: char,
        /// Stream index of the opening token.
        index: usize,
    },
}

/// Capability to judge whether raw source text is syntactically well-formed.
pub trait SyntaxValidator {
    /// Check `source`, returning the first defect found.
    ///
    /// # Errors
    /// Returns a [`LintError`] describing the first defect.
    fn validate(&self, source: &str) -> Result<(), LintError>;
}

/// Default validator: tokenizes the source and checks that delimiters
/// balance. Attribute openers (`#[`) count as `[`.
///
/// Deliberately shallow — it catches the class of damage a token-stream
/// rewrite can realistically cause (broken comments, strings, or pairing)
/// without parsing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenValidator;

impl SyntaxValidator for TokenValidator {
    fn validate(&self, source: &str) -> Result<(), LintError> {
        let tokens = tokenizer::tokenize(source)?;
        let mut stack: Vec<(char, usize)> = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            let content = match token.kind() {
                TokenKind::AttributeStart => "[",
                TokenKind::Punct => token.content(),
                _ => continue,
            };
            match content {
                "(" => stack.push(('(', index)),
                "[" => stack.push(('[', index)),
                "{" => stack.push(('{', index)),
                ")" | "]" | "}" => {
                    let (close, open) = match content {
                        ")" => (')', '('),
                        "]" => (']', '['),
                        _ => ('}', '{'),
                    };
                    match stack.pop() {
                        Some((found, _)) if found == open => {}
                        _ => {
                            return Err(LintError::UnmatchedClose {
                                delimiter: close,
                                index,
                            })
                        }
                    }
                }
                _ => {}
            }
        }

        if let Some((delimiter, index)) = stack.pop() {
            return Err(LintError::Unclosed { delimiter, index });
        }
        Ok(())
    }
}
