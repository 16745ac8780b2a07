//! Shared constants and regex patterns.

use regex::Regex;
use std::sync::OnceLock;

/// Name of the configuration file looked up next to the sources.
pub const CONFIG_FILENAME: &str = "phpfix.toml";

/// Literal suppression tag searched for before the regex runs.
pub const SUPPRESS_TAG: &str = "@psalm-suppress";

/// Source-file extension handled by the rules.
pub const PHP_EXTENSION: &str = "php";

/// Case-insensitive basename substring identifying data-transfer-object
/// files.
pub const DTO_NAME_MARKER: &str = "dto";

/// Regex matching a suppression directive: the tag, a lowercase/hyphen rule
/// identifier, and any trailing non-asterisk text.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_suppress_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?i)@psalm-suppress\s+[a-z-]*[^*]*")
            .expect("Invalid suppression directive regex pattern")
    })
}

pub use get_suppress_re as SUPPRESS_RE;
