// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Report generation: colored terminal output plus JSON and Markdown
//! artifacts

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

use super::types::{Category, Severity, SuiteOutcome, ValidationReport, Violation};

/// Check report generator
pub struct CheckReporter;

impl CheckReporter {
    /// Write JSON report
    pub fn write_json(report: &ValidationReport, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write Markdown report
    pub fn write_markdown(report: &ValidationReport, path: impl AsRef<Path>) -> Result<()> {
        let mut md = String::new();

        md.push_str("# Documentation Check Report\n\n");
        md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));
        md.push_str("---\n\n");

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Result:** {}\n", if report.passed() { "PASSED" } else { "FAILED" }));
        md.push_str(&format!("- **Suites:** {}\n", report.total_suites));
        md.push_str(&format!("- **Files checked:** {}\n", report.total_files_checked));
        md.push_str(&format!("- **Files with issues:** {}\n", report.total_files_with_issues));
        md.push_str(&format!(
            "- **Violations:** {} ({} errors, {} warnings)\n",
            report.total_violations, report.total_errors, report.total_warnings
        ));
        md.push_str(&format!(
            "- **Duration:** {:.2}s\n\n",
            report.total_duration.as_secs_f64()
        ));
        md.push_str("---\n\n");

        md.push_str("## Check Suites\n\n");
        for outcome in &report.suite_outcomes {
            md.push_str(&format!("### {}\n\n", outcome.suite.as_str().to_uppercase()));
            md.push_str(&format!("- **Result:** {}\n", if outcome.passed() { "passed" } else { "failed" }));
            md.push_str(&format!("- **Files checked:** {}\n", outcome.files_checked));
            md.push_str(&format!("- **Errors:** {}\n", outcome.errors));
            md.push_str(&format!("- **Warnings:** {}\n\n", outcome.warnings));

            if !outcome.violations.is_empty() {
                md.push_str("#### Violations\n\n");
                for violation in &outcome.violations {
                    let location = match violation.line {
                        Some(line) => format!("{}:{}", violation.file.display(), line),
                        None => violation.file.display().to_string(),
                    };
                    md.push_str(&format!(
                        "- `{}` [{}] {} ({})\n",
                        location,
                        violation.category.as_str(),
                        violation.message,
                        violation.severity.as_str()
                    ));
                }
                md.push('\n');
            }

            md.push_str("---\n\n");
        }

        fs::write(path, md)?;
        Ok(())
    }

    /// Print the full terminal report: violations grouped by suite and
    /// category, then the run summary
    pub fn print_report(report: &ValidationReport) {
        for outcome in &report.suite_outcomes {
            if !outcome.violations.is_empty() {
                Self::print_suite_violations(outcome);
            }
        }
        Self::print_summary(report);
    }

    fn print_suite_violations(outcome: &SuiteOutcome) {
        println!(
            "\n{} {} ({} errors, {} warnings)",
            "Suite:".bold(),
            outcome.suite.as_str().to_uppercase().cyan(),
            outcome.errors.to_string().red(),
            outcome.warnings.to_string().yellow()
        );
        println!("{}", "─".repeat(80).white());

        let mut categories: Vec<Category> =
            outcome.violations.iter().map(|v| v.category).collect();
        categories.sort();
        categories.dedup();

        for category in categories {
            println!("  {}", format!("[{}]", category.as_str()).bold());
            for violation in outcome.violations.iter().filter(|v| v.category == category) {
                Self::print_violation(violation);
            }
        }
    }

    fn print_violation(violation: &Violation) {
        let location = match violation.line {
            Some(line) => format!("{}:{}", violation.file.display(), line),
            None => violation.file.display().to_string(),
        };
        let tag = match violation.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow(),
        };
        println!("    {} {} {}", tag, location.white(), violation.message);
    }

    /// Print terminal summary
    pub fn print_summary(report: &ValidationReport) {
        println!("\n{}", "═".repeat(80).white());
        println!("{}", "Documentation Check Report".bold());
        println!("{}", "═".repeat(80).white());
        println!("  {} {}", "Timestamp:".white(), report.timestamp.cyan());
        println!(
            "  {} {}",
            "Files checked:".white(),
            report.total_files_checked.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Files with issues:".white(),
            if report.total_files_with_issues > 0 {
                report.total_files_with_issues.to_string().yellow()
            } else {
                report.total_files_with_issues.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Errors:".white(),
            if report.total_errors > 0 {
                report.total_errors.to_string().red()
            } else {
                report.total_errors.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Warnings:".white(),
            report.total_warnings.to_string().yellow()
        );
        println!(
            "  {} {:.2}s",
            "Duration:".white(),
            report.total_duration.as_secs_f64()
        );

        println!("\n{}", "Suite Results".bold());
        println!("{}", "─".repeat(80).white());
        for outcome in &report.suite_outcomes {
            let status_icon = if outcome.passed() { "✓".green() } else { "✗".red() };
            println!(
                "  {} {}: {} errors, {} warnings ({} files checked)",
                status_icon,
                outcome.suite.as_str().to_uppercase().cyan(),
                if outcome.errors > 0 {
                    outcome.errors.to_string().red()
                } else {
                    outcome.errors.to_string().green()
                },
                outcome.warnings.to_string().yellow(),
                outcome.files_checked
            );
        }

        println!("{}", "═".repeat(80).white());
        if report.passed() {
            println!("{}", "PASSED".green().bold());
        } else {
            println!("{}", "FAILED".red().bold());
        }
    }
}
