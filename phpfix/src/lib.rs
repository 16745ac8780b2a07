//! Token-stream rewrite rules ("fixers") for PHP source files.
//!
//! A fixer locates a pattern across a sequence of lexical tokens, mutates
//! the stream in place without disturbing the rest of the file, and signals
//! that it changed something only through the stream's dirty flag. The crate
//! ships two rules — blank-line separation of attributed DTO constructor
//! parameters, and `@psalm-suppress` directive stripping — plus the
//! verification harness that asserts every fix is exact, syntax-preserving,
//! and idempotent.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module for loading whitespace configuration from `phpfix.toml`.
pub mod config;

/// Module defining the fixer contract and its injected collaborators.
pub mod fixer;

/// Module providing pluggable syntax validation for the harness.
pub mod linting;

/// Module containing the concrete rewrite rules.
pub mod rules;

/// Module containing test utilities.
/// This helps in writing tests for the fixers and the token model.
pub mod test_utils;

/// Module lexing the PHP subset the rules operate on.
pub mod tokenizer;

/// Module defining the token model: tokens and token streams.
pub mod tokens;

pub use fixer::{FileInfo, FixError, Fixer, WhitespacesAwareFixer, WhitespacesConfig};
pub use tokens::{Token, TokenKind, TokenStream};
