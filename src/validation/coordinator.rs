// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Check coordinator - orchestrates suite execution over one discovery
//! pass

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

use super::config::ValidationConfig;
use super::discovery::{DocDiscovery, ModuleTree};
use super::types::{CheckSuite, SuiteOutcome};
use crate::checks;

/// Check coordinator
pub struct CheckCoordinator {
    config: ValidationConfig,
}

impl CheckCoordinator {
    /// Create a new coordinator
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run all configured check suites. Discovery happens once; a
    /// missing or unreadable root is fatal and yields no partial
    /// results.
    pub fn run_all(&self) -> Result<Vec<SuiteOutcome>> {
        let tree = DocDiscovery::discover(&self.config)?;
        let mut outcomes = Vec::new();

        for suite in CheckSuite::all() {
            if !self.config.should_run_suite(suite) {
                continue;
            }
            let outcome = self.run_suite_on(&tree, suite);
            let failed = !outcome.passed();
            outcomes.push(outcome);
            if failed && self.config.fail_fast {
                break;
            }
        }

        Ok(outcomes)
    }

    /// Run a single check suite
    pub fn run_suite(&self, suite: CheckSuite) -> Result<SuiteOutcome> {
        let tree = DocDiscovery::discover(&self.config)?;
        Ok(self.run_suite_on(&tree, suite))
    }

    fn run_suite_on(&self, tree: &ModuleTree, suite: CheckSuite) -> SuiteOutcome {
        if self.config.verbose {
            println!("{}", format!("Running {} checks...", suite.as_str()).bold().cyan());
        }

        let start = Instant::now();
        let mut outcome = match suite {
            CheckSuite::Structure => self.run_structure(tree),
            CheckSuite::Content => self.run_content(tree),
            CheckSuite::Navigation => self.run_navigation(tree),
            CheckSuite::Formatting => self.run_formatting(tree),
        };
        outcome.duration = start.elapsed();
        outcome.finish();
        outcome
    }

    fn run_structure(&self, tree: &ModuleTree) -> SuiteOutcome {
        let mut outcome = SuiteOutcome::new(CheckSuite::Structure);
        outcome.extend(checks::structure::validate_lesson_naming(tree));
        outcome.extend(checks::structure::validate_bilingual_pairs(&self.config, tree));
        outcome.files_checked = tree.directories.len();
        outcome
    }

    fn run_content(&self, tree: &ModuleTree) -> SuiteOutcome {
        let mut outcome = SuiteOutcome::new(CheckSuite::Content);
        let pairs = DocDiscovery::readme_pairs(&self.config, tree);
        let lesson_files = DocDiscovery::lesson_files(&self.config, tree);

        outcome.extend(checks::content::validate_parallel_structure(&self.config, &pairs));
        outcome.extend(checks::content::validate_language_links(&self.config, &pairs));
        outcome.extend(checks::content::validate_required_sections(&lesson_files));

        outcome.files_checked = pairs
            .iter()
            .map(|pair| pair.primary.is_some() as usize + pair.secondary.is_some() as usize)
            .sum();
        outcome
    }

    fn run_navigation(&self, tree: &ModuleTree) -> SuiteOutcome {
        let mut outcome = SuiteOutcome::new(CheckSuite::Navigation);
        outcome.extend(checks::navigation::validate_navigation_completeness(
            &self.config,
            &tree.lessons,
        ));
        outcome.extend(checks::navigation::validate_navigation_consistency(
            &self.config,
            &tree.lessons,
        ));
        outcome.files_checked = DocDiscovery::lesson_files(&self.config, tree).len();
        outcome
    }

    fn run_formatting(&self, tree: &ModuleTree) -> SuiteOutcome {
        let mut outcome = SuiteOutcome::new(CheckSuite::Formatting);

        let progress = if self.config.verbose {
            let bar = ProgressBar::new(tree.markdown_files.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(bar)
        } else {
            None
        };

        for file in &tree.markdown_files {
            outcome.extend(checks::formatting::validate_file_formatting(file));
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }
        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        outcome.files_checked = tree.markdown_files.len();
        outcome
    }
}
