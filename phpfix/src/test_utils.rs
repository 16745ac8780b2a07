//! Test utilities for exercising fixers against literal input/expected
//! pairs.
//!
//! [`FixerTester`] drives one fixer through the full verification sequence:
//! syntax-validate the fixture, tokenize, check candidacy, fix, compare the
//! serialized result against the expected text token by token, and finally
//! re-apply the fixer to its own output to prove the fix is a fixed point.

// Harness assertions are supposed to panic; that is their job.
#![allow(clippy::panic, clippy::expect_used)]

use std::hash::{Hash, Hasher};

use colored::Colorize;
use rustc_hash::{FxHashMap, FxHasher};

use crate::fixer::{FileInfo, Fixer};
use crate::linting::{SyntaxValidator, TokenValidator};
use crate::tokenizer::TokenizeError;
use crate::tokens::TokenStream;

/// Cache of parsed token streams keyed by source-text hash.
///
/// Replaces ambient global caching with an explicit object: the harness
/// clears it between test cases, and `parse` hands out clones so cached
/// entries are never aliased by a mutating fix pass.
#[derive(Debug, Default)]
pub struct StreamCache {
    streams: FxHashMap<u64, TokenStream>,
}

impl StreamCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `source`, reusing a cached stream when the same text was
    /// parsed before.
    ///
    /// # Errors
    /// Propagates tokenizer failures.
    pub fn parse(&mut self, source: &str) -> Result<TokenStream, TokenizeError> {
        let key = Self::key(source);
        if let Some(stream) = self.streams.get(&key) {
            return Ok(stream.clone());
        }
        let stream = TokenStream::from_code(source)?;
        self.streams.insert(key, stream.clone());
        Ok(stream)
    }

    /// Number of cached streams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Explicit invalidation between test cases.
    pub fn clear(&mut self) {
        self.streams.clear();
    }

    fn key(source: &str) -> u64 {
        let mut hasher = FxHasher::default();
        source.hash(&mut hasher);
        hasher.finish()
    }
}

/// Drives a fixer against literal `expected`/`input` pairs and asserts the
/// full contract: candidacy, exact output, syntactic validity of the output,
/// structural token equality, and idempotence.
pub struct FixerTester {
    validator: Box<dyn SyntaxValidator>,
    cache: StreamCache,
    file: FileInfo,
}

impl FixerTester {
    /// Tester with the default token-level validator and a generic file
    /// descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::with_validator(Box::new(TokenValidator))
    }

    /// Tester with an injected syntax validator.
    #[must_use]
    pub fn with_validator(validator: Box<dyn SyntaxValidator>) -> Self {
        Self {
            validator,
            cache: StreamCache::new(),
            file: FileInfo::new("src/FixerFile.php"),
        }
    }

    /// Override the file descriptor handed to `fix`.
    #[must_use]
    pub fn with_file(mut self, file: FileInfo) -> Self {
        self.file = file;
        self
    }

    /// Run the full verification sequence.
    ///
    /// With `input`: asserts the fixer claims candidacy, rewrites `input`
    /// into exactly `expected`, keeps the output syntactically valid, and
    /// produces a stream structurally equal to the tokenization of
    /// `expected`. Always: asserts `expected` is a fixed point (re-applying
    /// the fixer changes nothing and leaves the dirty flag clean).
    ///
    /// # Panics
    /// Panics on any contract violation, with a line diff of expected vs
    /// actual text for diagnosis.
    pub fn assert_fix(&mut self, fixer: &dyn Fixer, expected: &str, input: Option<&str>) {
        assert!(
            input != Some(expected),
            "Expected must be different to input."
        );

        self.cache.clear();
        self.lint(expected);
        let mut expected_tokens = self
            .cache
            .parse(expected)
            .expect("expected fixture must tokenize");

        if let Some(input) = input {
            self.lint(input);
            let mut input_tokens = self.cache.parse(input).expect("input fixture must tokenize");

            assert!(
                fixer.is_candidate(&input_tokens),
                "fixer `{}` must claim candidacy on the input",
                fixer.name()
            );

            fixer
                .fix(&self.file, &mut input_tokens)
                .expect("fix must not fail on a configured fixer");

            let actual = input_tokens.generate_code();
            if actual != expected {
                panic!(
                    "fixer `{}` produced wrong output:\n{}",
                    fixer.name(),
                    diff_report(expected, &actual)
                );
            }
            self.lint(&actual);
            assert_same_tokens(&expected_tokens, &input_tokens);
        }

        fixer
            .fix(&self.file, &mut expected_tokens)
            .expect("fix must not fail on a configured fixer");

        let settled = expected_tokens.generate_code();
        if settled != expected {
            panic!(
                "fixer `{}` is not idempotent:\n{}",
                fixer.name(),
                diff_report(expected, &settled)
            );
        }
        assert!(
            !expected_tokens.is_changed(),
            "fixer `{}` dirtied an already-fixed stream",
            fixer.name()
        );
    }

    fn lint(&self, source: &str) {
        if let Err(err) = self.validator.validate(source) {
            panic!("Linting failed with error: {err}\n```\n{source}\n```");
        }
    }
}

impl Default for FixerTester {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert two streams hold the same tokens at every index.
///
/// # Panics
/// Panics with the first differing index.
pub fn assert_same_tokens(expected: &TokenStream, actual: &TokenStream) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "Both collections must have the same size."
    );
    for (index, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
        assert!(
            exp == act,
            "Token at index {index} must be:\n{exp:?},\ngot:\n{act:?}."
        );
    }
}

/// Line-by-line diff of expected vs actual text for failure messages.
#[must_use]
pub fn diff_report(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let max_lines = expected_lines.len().max(actual_lines.len());

    let mut report = String::new();
    for i in 0..max_lines {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(exp), Some(act)) if exp == act => {}
            (Some(exp), Some(act)) => {
                report.push_str(&format!(
                    "Line {}:\n  - {}\n  + {}\n",
                    i + 1,
                    exp.green(),
                    act.red()
                ));
            }
            (Some(exp), None) => {
                report.push_str(&format!("Line {}: missing\n  - {}\n", i + 1, exp.green()));
            }
            (None, Some(act)) => {
                report.push_str(&format!("Line {}: extra\n  + {}\n", i + 1, act.red()));
            }
            (None, None) => {}
        }
    }

    format!(
        "{report}\nExpected:\n```\n{expected}\n```\nActual:\n```\n{actual}\n```"
    )
}
