//! Stripping of `@psalm-suppress` directives from documentation comments.

use std::borrow::Cow;

use crate::constants::{get_suppress_re, PHP_EXTENSION, SUPPRESS_TAG};
use crate::fixer::{FileInfo, FixError, Fixer};
use crate::tokens::{Token, TokenKind, TokenStream};

/// Removes inline `@psalm-suppress` directives from doc comments while
/// leaving the comment structure in place.
///
/// Stripping can leave a doc comment containing only whitespace; deleting
/// such comments entirely is the job of a later rule, which is why this one
/// declares an elevated priority.
#[derive(Debug, Default)]
pub struct RemovePsalmSuppressFixer;

impl RemovePsalmSuppressFixer {
    /// Stable rule identifier.
    pub const NAME: &'static str = "remove_psalm_suppress";

    /// Create the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Fixer for RemovePsalmSuppressFixer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Removes @psalm-suppress annotations from doc comments."
    }

    /// Must run before any rule that deletes now-empty doc comments.
    fn priority(&self) -> i32 {
        50
    }

    fn is_candidate(&self, tokens: &TokenStream) -> bool {
        tokens.contains_kind(TokenKind::DocComment)
    }

    fn supports(&self, file: &FileInfo) -> bool {
        file.extension().eq_ignore_ascii_case(PHP_EXTENSION)
    }

    fn fix(&self, _file: &FileInfo, tokens: &mut TokenStream) -> Result<(), FixError> {
        for index in 0..tokens.len() {
            let token = &tokens[index];
            if !token.is_kind(TokenKind::DocComment) || !token.content().contains(SUPPRESS_TAG) {
                continue;
            }

            // A borrowed Cow means nothing matched; replacing would only
            // set a spurious dirty flag.
            let new_content = match get_suppress_re().replace_all(token.content(), " ") {
                Cow::Borrowed(_) => continue,
                Cow::Owned(content) => content,
            };
            tokens.replace(index, Token::new(TokenKind::DocComment, new_content));
        }

        Ok(())
    }
}
