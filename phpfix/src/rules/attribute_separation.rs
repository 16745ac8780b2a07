//! Blank-line separation between attributed constructor-promoted properties
//! in DTO parameter lists.

use crate::constants::{DTO_NAME_MARKER, PHP_EXTENSION};
use crate::fixer::{FileInfo, FixError, Fixer, WhitespacesAwareFixer, WhitespacesConfig};
use crate::tokens::{Token, TokenKind, TokenStream};

/// Enforces that when one public promoted constructor parameter is annotated
/// with an attribute and the next one is too, exactly one blank line
/// separates them.
///
/// The rewrite only ever exchanges the content of an existing whitespace
/// token after the comma that closes the earlier parameter; it never inserts
/// or removes tokens, so the stream length is invariant under this rule.
#[derive(Debug, Default)]
pub struct DtoConstructAttributeSeparationFixer {
    whitespaces: Option<WhitespacesConfig>,
}

impl DtoConstructAttributeSeparationFixer {
    /// Stable rule identifier.
    pub const NAME: &'static str = "dto_construct_attribute_separation";

    /// Create the rule without a whitespace configuration; one must be
    /// injected before `fix` is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the rule with its configuration already injected.
    #[must_use]
    pub fn with_whitespaces_config(config: WhitespacesConfig) -> Self {
        Self {
            whitespaces: Some(config),
        }
    }

    /// Walk meaningful tokens from `index` toward `next_index`; the pair
    /// needs a separating blank line iff an attribute opener occurs strictly
    /// before `next_index`. Running off the end of the stream (malformed
    /// input) means no separation is needed.
    fn needs_separation(tokens: &TokenStream, index: usize, next_index: usize) -> bool {
        let mut cursor = index;
        while let Some(found) = tokens.next_meaningful(cursor) {
            if found >= next_index {
                return false;
            }
            if tokens[found].is_kind(TokenKind::AttributeStart) {
                return true;
            }
            cursor = found;
        }
        false
    }
}

impl Fixer for DtoConstructAttributeSeparationFixer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "DTO construct attributes must be separated with one blank line."
    }

    fn is_candidate(&self, tokens: &TokenStream) -> bool {
        tokens.contains_kind(TokenKind::PromotedPublic)
    }

    fn supports(&self, file: &FileInfo) -> bool {
        file.extension().eq_ignore_ascii_case(PHP_EXTENSION)
            && file.basename().to_lowercase().contains(DTO_NAME_MARKER)
    }

    fn fix(&self, _file: &FileInfo, tokens: &mut TokenStream) -> Result<(), FixError> {
        let config = self
            .whitespaces
            .as_ref()
            .ok_or(FixError::MissingWhitespacesConfig { fixer: Self::NAME })?;
        let line_ending = config.line_ending();
        let blank_line = format!("{line_ending}{line_ending}");

        let publics: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_kind(TokenKind::PromotedPublic))
            .map(|(i, _)| i)
            .collect();

        for (position, &index) in publics.iter().enumerate() {
            let Some(&next_index) = publics.get(position + 1) else {
                continue;
            };
            if !Self::needs_separation(tokens, index, next_index) {
                continue;
            }
            // The first comma after the marker closes this parameter. If no
            // whitespace follows it, this occurrence degrades to a no-op.
            let Some(comma) = tokens.next_punct(index, ",") else {
                continue;
            };
            let after = comma + 1;
            if tokens
                .get(after)
                .is_some_and(|t| t.is_kind(TokenKind::Whitespace))
                && tokens[after].content() != blank_line
            {
                tokens.replace(after, Token::new(TokenKind::Whitespace, blank_line.as_str()));
            }
        }

        Ok(())
    }
}

impl WhitespacesAwareFixer for DtoConstructAttributeSeparationFixer {
    fn set_whitespaces_config(&mut self, config: WhitespacesConfig) {
        self.whitespaces = Some(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_without_config_is_fatal() {
        let fixer = DtoConstructAttributeSeparationFixer::new();
        let mut tokens = TokenStream::from_code("<?php").unwrap();
        let err = fixer
            .fix(&FileInfo::new("SomeDTO.php"), &mut tokens)
            .unwrap_err();
        assert_eq!(
            err,
            FixError::MissingWhitespacesConfig {
                fixer: DtoConstructAttributeSeparationFixer::NAME
            }
        );
        assert!(!tokens.is_changed());
    }

    #[test]
    fn supports_dto_php_files_only() {
        let fixer = DtoConstructAttributeSeparationFixer::new();
        assert!(fixer.supports(&FileInfo::new("SomeRequestDTO.php")));
        assert!(fixer.supports(&FileInfo::new("dto_helpers.PHP")));
        assert!(!fixer.supports(&FileInfo::new("SomeRequest.php")));
        assert!(!fixer.supports(&FileInfo::new("SomeRequestDTO.js")));
    }

    #[test]
    fn metadata() {
        let fixer = DtoConstructAttributeSeparationFixer::new();
        assert_eq!(fixer.name(), "dto_construct_attribute_separation");
        assert_eq!(fixer.priority(), 0);
        assert!(!fixer.is_risky());
    }
}
