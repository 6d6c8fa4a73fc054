// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Formatting suite: heading continuity, code fences, list markers

use anyhow::Result;
use lessonlint::checks::formatting::validate_file_formatting;
use lessonlint::validation::{
    Category, CheckCoordinator, CheckSuite, Severity, ValidationConfig,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_markdown(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_clean_file_has_no_violations() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(
        &dir,
        "README.md",
        "# Title\n\n## Section\n\n### Detail\n\n```rust\nfn main() {}\n```\n\n- item one\n- item two\n",
    )?;

    assert!(validate_file_formatting(&file).is_empty());
    Ok(())
}

#[test]
fn test_heading_level_skip_is_an_error() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(&dir, "README.md", "# Title\n\n### Jumped\n")?;

    let violations = validate_file_formatting(&file);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].category, Category::HeadingHierarchy);
    assert_eq!(violations[0].severity, Severity::Error);
    assert_eq!(violations[0].line, Some(3));
    assert!(violations[0].message.contains("skipped a level"));
    Ok(())
}

#[test]
fn test_returning_to_a_shallower_level_is_fine() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(
        &dir,
        "README.md",
        "# Title\n## A\n### Deep\n## B\n### Deep again\n",
    )?;

    assert!(validate_file_formatting(&file).is_empty());
    Ok(())
}

#[test]
fn test_unclosed_code_block_reported_at_opening_line() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(&dir, "README.md", "# Title\n\n```rust\nfn main() {}\n")?;

    let violations = validate_file_formatting(&file);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].category, Category::CodeBlock);
    assert_eq!(violations[0].severity, Severity::Error);
    assert_eq!(violations[0].line, Some(3));
    assert!(violations[0].message.contains("never closed"));
    Ok(())
}

#[test]
fn test_missing_language_tag_is_only_a_warning() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(&dir, "README.md", "# Title\n\n```\nplain\n```\n")?;

    let violations = validate_file_formatting(&file);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::Warning);
    assert!(violations[0].message.contains("language tag"));
    Ok(())
}

#[test]
fn test_malformed_heading_and_list_marker_errors() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(&dir, "README.md", "##Broken\n\n-no space\n")?;

    let violations = validate_file_formatting(&file);
    assert_eq!(violations.len(), 2);
    assert!(violations
        .iter()
        .any(|v| v.category == Category::HeadingHierarchy
            && v.message.contains("missing space after # symbols")));
    assert!(violations
        .iter()
        .any(|v| v.category == Category::ListFormatting
            && v.message.contains("not followed by a space")));
    assert!(violations.iter().all(|v| v.severity == Severity::Error));
    Ok(())
}

#[test]
fn test_odd_list_indent_is_a_warning() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(&dir, "README.md", "# T\n\n- top\n   - three spaces deep\n")?;

    let violations = validate_file_formatting(&file);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::Warning);
    assert_eq!(violations[0].category, Category::ListFormatting);
    assert_eq!(violations[0].line, Some(4));
    Ok(())
}

#[test]
fn test_warning_only_files_still_pass_the_suite() -> Result<()> {
    let dir = TempDir::new()?;
    write_markdown(&dir, "README.md", "# T\n\n```\nuntagged but closed\n```\n")?;

    let config = ValidationConfig::for_root(dir.path());
    let coordinator = CheckCoordinator::new(config);
    let outcome = coordinator.run_suite(CheckSuite::Formatting)?;

    assert!(outcome.passed());
    assert_eq!(outcome.warnings, 1);
    assert_eq!(outcome.errors, 0);
    assert_eq!(outcome.files_checked, 1);
    Ok(())
}

#[test]
fn test_fence_interior_is_opaque_to_other_rules() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_markdown(
        &dir,
        "README.md",
        "# T\n\n```text\n##not a heading\n-not a list\n### not a skip\n```\n",
    )?;

    assert!(validate_file_formatting(&file).is_empty());
    Ok(())
}
