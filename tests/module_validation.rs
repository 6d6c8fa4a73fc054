// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! End-to-end validation of a bilingual curriculum module

use anyhow::Result;
use lessonlint::validation::Category;
use lessonlint::check_tree;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lesson_markdown_en(prev: Option<&str>, next: Option<&str>) -> String {
    let prev_line = match prev {
        Some(dir) => format!("[← Previous: {dir}](../{dir}/README.md)"),
        None => "[← Previous: Module Overview](../README.md)".to_string(),
    };
    let next_line = match next {
        Some(dir) => format!("\n[Next: {dir} →](../{dir}/README.md)\n"),
        None => String::new(),
    };

    format!(
        "# Working With The Topic\n\
         \n\
         🌐 Language: [Bahasa Indonesia](README_ID.md)\n\
         \n\
         ## Overview\n\
         \n\
         Short lesson summary.\n\
         \n\
         ## Learning Objectives\n\
         \n\
         - Understand the topic\n\
         - Apply it in practice\n\
         \n\
         ## Prerequisites\n\
         \n\
         - Completion of the earlier material\n\
         \n\
         ## Core Concepts\n\
         \n\
         ```rust\n\
         fn main() {{\n\
             println!(\"hello\");\n\
         }}\n\
         ```\n\
         \n\
         ## Best Practices\n\
         \n\
         - Keep examples small\n\
         \n\
         ## Common Mistakes\n\
         \n\
         - Skipping the exercises\n\
         \n\
         ## Next Steps\n\
         \n\
         Continue with the module.\n\
         \n\
         ## Source Attribution\n\
         \n\
         Adapted from the upstream curriculum.\n\
         \n\
         ---\n\
         \n\
         [Module Home](../README.md)\n\
         \n\
         {prev_line}\n\
         {next_line}"
    )
}

fn lesson_markdown_id(prev: Option<&str>, next: Option<&str>) -> String {
    let prev_line = match prev {
        Some(dir) => format!("[← Sebelumnya: {dir}](../{dir}/README_ID.md)"),
        None => "[← Sebelumnya: Ikhtisar Modul](../README_ID.md)".to_string(),
    };
    let next_line = match next {
        Some(dir) => format!("\n[Selanjutnya: {dir} →](../{dir}/README_ID.md)\n"),
        None => String::new(),
    };

    format!(
        "# Bekerja Dengan Topik\n\
         \n\
         🌐 Bahasa: [English](README.md)\n\
         \n\
         ## Gambaran Umum\n\
         \n\
         Ringkasan pelajaran.\n\
         \n\
         ## Tujuan Pembelajaran\n\
         \n\
         - Memahami topik\n\
         - Menerapkannya\n\
         \n\
         ## Prasyarat\n\
         \n\
         - Menyelesaikan materi awal\n\
         \n\
         ## Konsep Inti\n\
         \n\
         ```rust\n\
         fn main() {{\n\
             println!(\"halo\");\n\
         }}\n\
         ```\n\
         \n\
         ## Praktik Terbaik\n\
         \n\
         - Jaga contoh tetap kecil\n\
         \n\
         ## Kesalahan Umum\n\
         \n\
         - Melewatkan latihan\n\
         \n\
         ## Langkah Selanjutnya\n\
         \n\
         Lanjutkan modul ini.\n\
         \n\
         ## Atribusi Sumber\n\
         \n\
         Diadaptasi dari kurikulum sumber.\n\
         \n\
         ---\n\
         \n\
         [Beranda Modul](../README_ID.md)\n\
         \n\
         {prev_line}\n\
         {next_line}"
    )
}

fn write_lesson(root: &Path, dir: &str, prev: Option<&str>, next: Option<&str>) -> Result<()> {
    let lesson = root.join(dir);
    fs::create_dir_all(&lesson)?;
    fs::write(lesson.join("README.md"), lesson_markdown_en(prev, next))?;
    fs::write(lesson.join("README_ID.md"), lesson_markdown_id(prev, next))?;
    Ok(())
}

fn write_module_root(root: &Path) -> Result<()> {
    fs::write(
        root.join("README.md"),
        "# Module: Rust Fundamentals\n\
         \n\
         🌐 Language: [Bahasa Indonesia](README_ID.md)\n\
         \n\
         ## Lessons\n\
         \n\
         - [Fundamentals](01-fundamentals/README.md)\n\
         - [Ownership and Borrowing](02-ownership-borrowing/README.md)\n",
    )?;
    fs::write(
        root.join("README_ID.md"),
        "# Modul: Dasar Rust\n\
         \n\
         🌐 Bahasa: [English](README.md)\n\
         \n\
         ## Pelajaran\n\
         \n\
         - [Dasar](01-fundamentals/README_ID.md)\n\
         - [Kepemilikan dan Peminjaman](02-ownership-borrowing/README_ID.md)\n",
    )?;
    Ok(())
}

fn write_clean_module(root: &Path) -> Result<()> {
    write_module_root(root)?;
    write_lesson(root, "01-fundamentals", None, Some("02-ownership-borrowing"))?;
    write_lesson(root, "02-ownership-borrowing", Some("01-fundamentals"), None)?;
    Ok(())
}

#[test]
fn test_clean_module_passes_every_suite() -> Result<()> {
    let dir = TempDir::new()?;
    write_clean_module(dir.path())?;

    let report = check_tree(dir.path())?;
    for outcome in &report.suite_outcomes {
        assert!(
            outcome.violations.is_empty(),
            "{} suite reported: {:?}",
            outcome.suite.as_str(),
            outcome.violations
        );
    }
    assert!(report.passed());
    assert_eq!(report.total_violations, 0);
    Ok(())
}

#[test]
fn test_missing_counterpart_is_the_only_violation() -> Result<()> {
    let dir = TempDir::new()?;
    write_clean_module(dir.path())?;
    fs::remove_file(dir.path().join("02-ownership-borrowing/README_ID.md"))?;

    let report = check_tree(dir.path())?;
    assert!(report.has_failures());
    assert_eq!(report.total_errors, 1);

    let all: Vec<_> = report
        .suite_outcomes
        .iter()
        .flat_map(|o| o.violations.iter())
        .collect();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, Category::BilingualPair);
    assert!(all[0].message.contains("README_ID.md"));
    Ok(())
}

#[test]
fn test_runs_are_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    write_clean_module(dir.path())?;
    // Introduce a mix of violations so there is something to compare
    fs::remove_file(dir.path().join("01-fundamentals/README_ID.md"))?;
    fs::write(
        dir.path().join("02-ownership-borrowing/extra.md"),
        "# Extra\n### Skipped a level\n```\nuntagged\n",
    )?;

    let first = check_tree(dir.path())?;
    let second = check_tree(dir.path())?;

    let collect = |report: &lessonlint::ValidationReport| {
        report
            .suite_outcomes
            .iter()
            .flat_map(|o| o.violations.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(collect(&first), collect(&second));
    Ok(())
}

#[test]
fn test_missing_root_is_fatal() {
    assert!(check_tree("/nonexistent/curriculum-module").is_err());
}
