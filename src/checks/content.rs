// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Content checks: parallel heading structure, cross-language links,
//! required sections

use std::path::PathBuf;

use super::read_markdown;
use crate::locale::{self, Section};
use crate::markdown::MarkdownStructure;
use crate::validation::{Category, ReadmePair, ValidationConfig, Violation};

/// Bilingual pairs must have structurally parallel heading sequences:
/// equal length, and the same level at every position. Text is free to
/// differ between translations.
pub fn validate_parallel_structure(
    config: &ValidationConfig,
    pairs: &[ReadmePair],
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for pair in pairs.iter().filter(|pair| pair.is_complete()) {
        let (Some(primary), Some(secondary)) = (&pair.primary, &pair.secondary) else {
            continue;
        };
        let Some(primary_text) = read_markdown(primary, &mut violations) else {
            continue;
        };
        let Some(secondary_text) = read_markdown(secondary, &mut violations) else {
            continue;
        };

        let primary_headings = MarkdownStructure::scan(&primary_text).headings;
        let secondary_headings = MarkdownStructure::scan(&secondary_text).headings;

        if primary_headings.len() != secondary_headings.len() {
            violations.push(Violation::error(
                secondary,
                Category::ParallelStructure,
                format!(
                    "heading count mismatch: {} has {} headings, {} has {}",
                    config.primary_readme,
                    primary_headings.len(),
                    config.secondary_readme,
                    secondary_headings.len()
                ),
            ));
            continue;
        }

        for (position, (ours, theirs)) in
            primary_headings.iter().zip(&secondary_headings).enumerate()
        {
            if ours.level != theirs.level {
                violations.push(Violation::error_at(
                    secondary,
                    theirs.line,
                    Category::ParallelStructure,
                    format!(
                        "heading level mismatch at position {}: '{}' is level {} in {} \
                         but '{}' is level {} in {}",
                        position + 1,
                        ours.text,
                        ours.level,
                        config.primary_readme,
                        theirs.text,
                        theirs.level,
                        config.secondary_readme
                    ),
                ));
            }
        }
    }

    violations
}

/// Each file of a pair must reference its counterpart by filename, and
/// the translated file must additionally carry a language-switch
/// marker.
pub fn validate_language_links(config: &ValidationConfig, pairs: &[ReadmePair]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for pair in pairs.iter().filter(|pair| pair.is_complete()) {
        let (Some(primary), Some(secondary)) = (&pair.primary, &pair.secondary) else {
            continue;
        };
        let Some(primary_text) = read_markdown(primary, &mut violations) else {
            continue;
        };
        let Some(secondary_text) = read_markdown(secondary, &mut violations) else {
            continue;
        };

        if !primary_text.contains(&config.secondary_readme) {
            violations.push(Violation::error(
                primary,
                Category::LanguageLink,
                format!("does not reference its counterpart {}", config.secondary_readme),
            ));
        }
        if !secondary_text.contains(&config.primary_readme) {
            violations.push(Violation::error(
                secondary,
                Category::LanguageLink,
                format!("does not reference its counterpart {}", config.primary_readme),
            ));
        }
        if !locale::has_language_switch_marker(&secondary_text) {
            violations.push(Violation::error(
                secondary,
                Category::LanguageLink,
                "missing language switch marker (a labeled link to the other language)",
            ));
        }
    }

    violations
}

/// Every lesson file must carry the mandatory section headings plus at
/// least one of the advice sections, in either language.
pub fn validate_required_sections(lesson_files: &[PathBuf]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for file in lesson_files {
        let Some(text) = read_markdown(file, &mut violations) else {
            continue;
        };
        let headings = MarkdownStructure::scan(&text).headings;

        for section in Section::MANDATORY {
            if !headings.iter().any(|h| section.matches(&h.text)) {
                violations.push(Violation::error(
                    file,
                    Category::RequiredSection,
                    format!("missing required section \"{}\"", section.name()),
                ));
            }
        }

        let has_advice = Section::ANY_OF
            .iter()
            .any(|section| headings.iter().any(|h| section.matches(&h.text)));
        if !has_advice {
            let names: Vec<_> = Section::ANY_OF
                .iter()
                .map(|section| format!("\"{}\"", section.name()))
                .collect();
            violations.push(Violation::error(
                file,
                Category::RequiredSection,
                format!("missing section: expected at least one of {}", names.join(" or ")),
            ));
        }
    }

    violations
}
