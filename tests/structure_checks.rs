// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Structure suite: lesson naming and bilingual pairing

use anyhow::Result;
use lessonlint::checks::structure::{validate_bilingual_pairs, validate_lesson_naming};
use lessonlint::validation::{Category, DocDiscovery, ValidationConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn discover(root: &Path) -> Result<(ValidationConfig, lessonlint::validation::ModuleTree)> {
    let config = ValidationConfig::for_root(root);
    let tree = DocDiscovery::discover(&config)?;
    Ok((config, tree))
}

#[test]
fn test_conforming_names_pass() -> Result<()> {
    let dir = TempDir::new()?;
    for name in ["01-fundamentals", "02-ownership-borrowing", "10-defi-deep-dive"] {
        fs::create_dir(dir.path().join(name))?;
    }

    let (_, tree) = discover(dir.path())?;
    assert!(validate_lesson_naming(&tree).is_empty());
    Ok(())
}

#[test]
fn test_nonconforming_names_are_flagged_with_expected_pattern() -> Result<()> {
    let dir = TempDir::new()?;
    for name in ["01-fundamentals", "3-intro", "02_accounts", "03-Accounts"] {
        fs::create_dir(dir.path().join(name))?;
    }

    let (_, tree) = discover(dir.path())?;
    let violations = validate_lesson_naming(&tree);
    assert_eq!(violations.len(), 3);
    for violation in &violations {
        assert_eq!(violation.category, Category::DirectoryNaming);
        assert!(violation.message.contains("two digits"));
    }
    Ok(())
}

#[test]
fn test_excluded_directories_are_not_named_checked() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("01-fundamentals"))?;
    fs::create_dir(dir.path().join("node_modules"))?;
    fs::create_dir(dir.path().join("solutions"))?;

    let (_, tree) = discover(dir.path())?;
    assert!(validate_lesson_naming(&tree).is_empty());
    Ok(())
}

#[test]
fn test_lone_primary_readme_reports_missing_counterpart() -> Result<()> {
    let dir = TempDir::new()?;
    let lesson = dir.path().join("01-fundamentals");
    fs::create_dir(&lesson)?;
    fs::write(lesson.join("README.md"), "# Fundamentals\n")?;

    let (config, tree) = discover(dir.path())?;
    let violations = validate_bilingual_pairs(&config, &tree);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].category, Category::BilingualPair);
    assert!(violations[0].message.contains("README_ID.md is missing"));
    Ok(())
}

#[test]
fn test_lone_secondary_readme_reports_missing_counterpart() -> Result<()> {
    let dir = TempDir::new()?;
    let lesson = dir.path().join("01-fundamentals");
    fs::create_dir(&lesson)?;
    fs::write(lesson.join("README_ID.md"), "# Dasar\n")?;

    let (config, tree) = discover(dir.path())?;
    let violations = validate_bilingual_pairs(&config, &tree);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("README.md is missing"));
    Ok(())
}

#[test]
fn test_directory_with_neither_variant_is_not_a_violation() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("01-fundamentals"))?;

    let (config, tree) = discover(dir.path())?;
    assert!(validate_bilingual_pairs(&config, &tree).is_empty());
    Ok(())
}

#[test]
fn test_pairs_inside_excluded_directories_are_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let hidden = dir.path().join("01-fundamentals/solutions");
    fs::create_dir_all(&hidden)?;
    fs::write(hidden.join("README.md"), "# Solution notes\n")?;

    let (config, tree) = discover(dir.path())?;
    assert!(validate_bilingual_pairs(&config, &tree).is_empty());
    Ok(())
}
