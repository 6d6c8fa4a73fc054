// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Lessonlint CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use lessonlint::validation::{
    CheckCoordinator, CheckReporter, CheckSuite, ValidationConfig, ValidationReport,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lessonlint")]
#[command(about = "Structural checks for bilingual curriculum documentation", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output directory for report artifacts
    #[arg(short, long, global = true, default_value = "reports")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all check suites
    All {
        /// Module root to validate
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Check suites to run (comma-separated: structure,content,navigation,formatting)
        #[arg(long)]
        suites: Option<String>,

        /// Stop after the first suite with errors
        #[arg(long)]
        fail_fast: bool,
    },

    /// Run a specific check suite
    Suite {
        /// Suite to run (structure, content, navigation, formatting)
        suite: String,

        /// Module root to validate
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Generate a report from existing results
    Report {
        /// Input JSON report file
        #[arg(short, long)]
        input: String,

        /// Output format (json, markdown, terminal)
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::All { root, suites, fail_fast } => {
            run_all_checks(root, suites.as_deref(), *fail_fast, &cli.output, cli.verbose)?;
        }
        Commands::Suite { suite, root } => {
            run_suite(suite, root, &cli.output, cli.verbose)?;
        }
        Commands::Report { input, format } => {
            generate_report(input, format, &cli.output)?;
        }
    }

    Ok(())
}

fn run_all_checks(
    root: &PathBuf,
    suites: Option<&str>,
    fail_fast: bool,
    output_dir: &str,
    verbose: bool,
) -> Result<()> {
    let mut config = ValidationConfig::load().unwrap_or_default();
    config.root = root.clone();
    config.verbose = verbose;
    config.fail_fast = fail_fast;
    config.output_dir = PathBuf::from(output_dir);

    if let Some(suites_str) = suites {
        config.suites = suites_str
            .split(',')
            .map(|s| s.trim())
            .filter_map(CheckSuite::from_str)
            .collect();
    } else {
        config.suites = CheckSuite::all().to_vec();
    }

    if verbose {
        println!("{}", "Starting documentation checks...".bold());
        println!("  Root: {}", config.root.display());
        println!(
            "  Suites: {:?}",
            config.suites.iter().map(|s| s.as_str()).collect::<Vec<_>>()
        );
        println!("  Output: {}", config.output_dir.display());
    }

    let coordinator = CheckCoordinator::new(config);
    let outcomes = coordinator.run_all()?;

    let mut report = ValidationReport::new();
    for outcome in outcomes {
        report.add_suite_outcome(outcome);
    }

    write_reports(&report, output_dir, "check_report")?;
    CheckReporter::print_report(&report);

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

fn run_suite(suite_name: &str, root: &PathBuf, output_dir: &str, verbose: bool) -> Result<()> {
    let suite = CheckSuite::from_str(suite_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown check suite: {}", suite_name))?;

    let mut config = ValidationConfig::load().unwrap_or_default();
    config.root = root.clone();
    config.verbose = verbose;
    config.output_dir = PathBuf::from(output_dir);
    config.suites = vec![suite];

    let coordinator = CheckCoordinator::new(config);
    let outcome = coordinator.run_suite(suite)?;

    let mut report = ValidationReport::new();
    report.add_suite_outcome(outcome);

    write_reports(&report, output_dir, &format!("{}_report", suite.as_str()))?;
    CheckReporter::print_report(&report);

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

fn write_reports(report: &ValidationReport, output_dir: &str, stem: &str) -> Result<()> {
    let output_path = PathBuf::from(output_dir);
    std::fs::create_dir_all(&output_path)?;

    CheckReporter::write_json(report, output_path.join(format!("{stem}.json")))?;
    CheckReporter::write_markdown(report, output_path.join(format!("{stem}.md")))?;
    Ok(())
}

fn generate_report(input: &str, format: &str, output_dir: &str) -> Result<()> {
    let json_content = std::fs::read_to_string(input)?;
    let report: ValidationReport = serde_json::from_str(&json_content)?;

    let output_path = PathBuf::from(output_dir);
    std::fs::create_dir_all(&output_path)?;

    match format.to_lowercase().as_str() {
        "json" => {
            let json_path = output_path.join("report.json");
            CheckReporter::write_json(&report, &json_path)?;
            println!("{} Generated JSON report: {}", "Success:".green(), json_path.display());
        }
        "markdown" | "md" => {
            let md_path = output_path.join("report.md");
            CheckReporter::write_markdown(&report, &md_path)?;
            println!("{} Generated Markdown report: {}", "Success:".green(), md_path.display());
        }
        "terminal" | "term" => {
            CheckReporter::print_report(&report);
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown format: {}. Use json, markdown, or terminal",
                format
            ));
        }
    }

    Ok(())
}
