// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Markdown formatting checks: heading-level continuity, code-fence
//! correctness, list-marker conventions

use std::path::Path;

use super::read_markdown;
use crate::markdown::MarkdownStructure;
use crate::validation::{Category, Violation};

/// Run the three formatting rule sets over one file
pub fn validate_file_formatting(file: &Path) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(text) = read_markdown(file, &mut violations) else {
        return violations;
    };

    let structure = MarkdownStructure::scan(&text);

    // Fence and list-marker findings come straight off the scanner
    for issue in &structure.issues {
        violations.push(Violation {
            file: file.to_path_buf(),
            line: Some(issue.line),
            category: issue.category,
            severity: issue.severity,
            message: issue.message.clone(),
        });
    }

    // Heading-level continuity: a heading may go at most one level
    // deeper than the previous one. The first heading is unconstrained.
    let mut previous_level: Option<u8> = None;
    for heading in &structure.headings {
        if let Some(previous) = previous_level {
            if heading.level > previous + 1 {
                violations.push(Violation::error_at(
                    file,
                    heading.line,
                    Category::HeadingHierarchy,
                    format!(
                        "heading level jumps from {} to {} (skipped a level)",
                        previous, heading.level
                    ),
                ));
            }
        }
        previous_level = Some(heading.level);
    }

    violations
}
