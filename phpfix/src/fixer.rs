//! The contract every rewrite rule implements, plus the injected
//! collaborators it depends on: the file descriptor and the whitespace
//! configuration.

use std::path::Path;

use thiserror::Error;

use crate::tokens::TokenStream;

/// Fatal error raised by a rule before any mutation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// A whitespace-aware rule was invoked without its configuration.
    #[error("fixer `{fixer}` requires a whitespaces config before fix() is called")]
    MissingWhitespacesConfig {
        /// Name of the offending fixer.
        fixer: &'static str,
    },
}

/// Error raised when a whitespace configuration value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Line ending must be `"\n"` or `"\r\n"`.
    #[error("invalid line ending {0:?}, expected \"\\n\" or \"\\r\\n\"")]
    InvalidLineEnding(String),
    /// Indent must be spaces only or a single tab.
    #[error("invalid indent {0:?}, expected spaces or a tab")]
    InvalidIndent(String),
}

/// Line-ending and indent configuration injected into whitespace-aware
/// rules. Treated as configuration, not input: it is set once per fixer,
/// independently of any `fix` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespacesConfig {
    indent: String,
    line_ending: String,
}

impl WhitespacesConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    /// Rejects line endings other than `"\n"`/`"\r\n"` and indents that are
    /// not all-spaces or a single tab.
    pub fn new(indent: &str, line_ending: &str) -> Result<Self, ConfigError> {
        if line_ending != "\n" && line_ending != "\r\n" {
            return Err(ConfigError::InvalidLineEnding(line_ending.to_owned()));
        }
        if indent != "\t" && (indent.is_empty() || !indent.chars().all(|c| c == ' ')) {
            return Err(ConfigError::InvalidIndent(indent.to_owned()));
        }
        Ok(Self {
            indent: indent.to_owned(),
            line_ending: line_ending.to_owned(),
        })
    }

    /// The configured indent unit.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// The configured line ending (`"\n"` or `"\r\n"`).
    #[must_use]
    pub fn line_ending(&self) -> &str {
        &self.line_ending
    }
}

impl Default for WhitespacesConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_owned(),
            line_ending: "\n".to_owned(),
        }
    }
}

/// File-level metadata used by `supports` predicates.
///
/// Only the extension and base name matter to rule logic; path resolution
/// belongs to the external discovery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    extension: String,
    basename: String,
}

impl FileInfo {
    /// Build a descriptor from a path-like value.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
            basename: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// File extension without the leading dot, empty if none.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name including the extension.
    #[must_use]
    pub fn basename(&self) -> &str {
        &self.basename
    }
}

/// Trait defining a token-stream rewrite rule.
///
/// A fixer instance is long-lived and stateless across files apart from
/// injected configuration. Streams are fixed in place; "did anything
/// change" is signaled exclusively through [`TokenStream::is_changed`],
/// never through a return value. The `Ok` of [`Fixer::fix`] carries no
/// information; the error path exists only for fatal configuration errors,
/// raised before any mutation is attempted.
pub trait Fixer: Send + Sync {
    /// Stable identifier of the rule.
    fn name(&self) -> &'static str;

    /// One-line summary of what the rule rewrites.
    fn description(&self) -> &'static str;

    /// Ordering among rules claiming candidacy on the same file; higher
    /// runs earlier.
    fn priority(&self) -> i32 {
        0
    }

    /// True if the rewrite can change program behavior.
    fn is_risky(&self) -> bool {
        false
    }

    /// Cheap pre-filter. Must never produce a false negative: returning
    /// `false` for a stream that needs fixing is a correctness bug.
    fn is_candidate(&self, tokens: &TokenStream) -> bool;

    /// File-level gate, evaluated before tokenizing; must not require the
    /// stream.
    fn supports(&self, file: &FileInfo) -> bool;

    /// Mutate the stream in place. Must be idempotent: applied to its own
    /// output it leaves the stream unchanged with a clean dirty flag.
    ///
    /// # Errors
    /// Only the fatal cases of the error taxonomy (missing whitespace
    /// configuration); "nothing to do" is never an error.
    fn fix(&self, file: &FileInfo, tokens: &mut TokenStream) -> Result<(), FixError>;
}

/// Implemented by rules that depend on the injected line-ending
/// configuration.
pub trait WhitespacesAwareFixer: Fixer {
    /// Inject the whitespace configuration. Must be called before `fix`.
    fn set_whitespaces_config(&mut self, config: WhitespacesConfig);
}
