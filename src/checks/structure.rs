// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Directory convention checks: lesson naming and bilingual pairing

use regex::Regex;
use std::sync::LazyLock;

use crate::validation::{
    Category, DocDiscovery, ModuleTree, ReadmePair, ValidationConfig, Violation,
};

/// Full lesson directory naming convention: two digits, hyphen, then
/// lowercase words joined by hyphens
static LESSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-[a-z-]+$").expect("lesson name pattern is invalid"));

/// Every immediate subdirectory of the module root must follow the
/// lesson naming convention
pub fn validate_lesson_naming(tree: &ModuleTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    for name in &tree.top_level_dirs {
        if !LESSON_NAME_RE.is_match(name) {
            violations.push(Violation::error(
                tree.root.join(name),
                Category::DirectoryNaming,
                format!(
                    "directory name '{name}' does not match the lesson naming convention \
                     (expected two digits, a hyphen, then lowercase words joined by hyphens, \
                     e.g. '01-fundamentals')"
                ),
            ));
        }
    }
    violations
}

/// Every directory holding one language variant of a README must hold
/// the other. Directories with neither variant are fine: having no
/// documentation is not an error at this layer.
pub fn validate_bilingual_pairs(config: &ValidationConfig, tree: &ModuleTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    for pair in DocDiscovery::readme_pairs(config, tree) {
        violations.extend(check_pair(config, &pair));
    }
    violations
}

fn check_pair(config: &ValidationConfig, pair: &ReadmePair) -> Option<Violation> {
    match (&pair.primary, &pair.secondary) {
        (Some(primary), None) => Some(Violation::error(
            primary,
            Category::BilingualPair,
            format!(
                "{} exists but its counterpart {} is missing",
                config.primary_readme, config.secondary_readme
            ),
        )),
        (None, Some(secondary)) => Some(Violation::error(
            secondary,
            Category::BilingualPair,
            format!(
                "{} exists but its counterpart {} is missing",
                config.secondary_readme, config.primary_readme
            ),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_name_pattern() {
        for name in ["01-fundamentals", "02-ownership-borrowing", "99-z"] {
            assert!(LESSON_NAME_RE.is_match(name), "{name} should match");
        }
        for name in ["1-fundamentals", "01_fundamentals", "01-Fundamentals", "fundamentals"] {
            assert!(!LESSON_NAME_RE.is_match(name), "{name} should not match");
        }
    }
}
