//! The concrete rewrite rules built on the [`Fixer`](crate::fixer::Fixer)
//! contract.

/// Blank-line separation of attributed DTO constructor parameters.
pub mod attribute_separation;
/// `@psalm-suppress` directive stripping.
pub mod remove_suppress;

pub use attribute_separation::DtoConstructAttributeSeparationFixer;
pub use remove_suppress::RemovePsalmSuppressFixer;

use crate::fixer::{Fixer, WhitespacesConfig};

/// Returns all built-in fixers, configured and sorted so that higher
/// priorities run first.
#[must_use]
pub fn registered_fixers(config: &WhitespacesConfig) -> Vec<Box<dyn Fixer>> {
    let mut fixers: Vec<Box<dyn Fixer>> = vec![
        Box::new(DtoConstructAttributeSeparationFixer::with_whitespaces_config(config.clone())),
        Box::new(RemovePsalmSuppressFixer::new()),
    ];
    fixers.sort_by_key(|f| std::cmp::Reverse(f.priority()));
    fixers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppress_rule_runs_before_default_priority_rules() {
        let fixers = registered_fixers(&WhitespacesConfig::default());
        let names: Vec<_> = fixers.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "remove_psalm_suppress",
                "dto_construct_attribute_separation"
            ]
        );
        for fixer in &fixers {
            assert!(!fixer.description().is_empty());
            assert!(!fixer.is_risky());
        }
    }
}
