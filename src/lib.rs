// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Lessonlint
//!
//! Structural validation for bilingual Markdown curriculum trees:
//! directory conventions, bilingual pairing, parallel heading
//! structure, navigation links, and Markdown formatting rules.

pub mod checks;
pub mod locale;
pub mod markdown;
pub mod validation;

pub use markdown::{FencedBlock, Heading, ListItem, MarkdownStructure};
pub use validation::{
    Category, CheckCoordinator, CheckReporter, CheckSuite, Severity, SuiteOutcome,
    ValidationConfig, ValidationReport, Violation,
};

use anyhow::Result;
use std::path::Path;

/// Run every check suite against a module root with default settings
pub fn check_tree(root: impl AsRef<Path>) -> Result<ValidationReport> {
    let config = ValidationConfig::for_root(root.as_ref());
    let coordinator = CheckCoordinator::new(config);
    let outcomes = coordinator.run_all()?;

    let mut report = ValidationReport::new();
    for outcome in outcomes {
        report.add_suite_outcome(outcome);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tree_on_missing_root_fails() {
        assert!(check_tree("/nonexistent/lessonlint-root").is_err());
    }
}
