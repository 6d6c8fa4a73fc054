// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Unified violation and report types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

// Custom serialization for Duration
fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Ok(Duration::from_secs_f64(secs))
}

/// Check suite type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckSuite {
    Structure,
    Content,
    Navigation,
    Formatting,
}

impl CheckSuite {
    /// All suites, in the order they run
    pub fn all() -> [CheckSuite; 4] {
        [
            CheckSuite::Structure,
            CheckSuite::Content,
            CheckSuite::Navigation,
            CheckSuite::Formatting,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckSuite::Structure => "structure",
            CheckSuite::Content => "content",
            CheckSuite::Navigation => "navigation",
            CheckSuite::Formatting => "formatting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "structure" => Some(CheckSuite::Structure),
            "content" => Some(CheckSuite::Content),
            "navigation" => Some(CheckSuite::Navigation),
            "formatting" | "format" => Some(CheckSuite::Formatting),
            _ => None,
        }
    }
}

/// Violation severity. Only errors flip a run to failed; warnings are
/// reported but never affect the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Violation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DirectoryNaming,
    BilingualPair,
    ParallelStructure,
    LanguageLink,
    RequiredSection,
    NavigationLink,
    NavigationConsistency,
    HeadingHierarchy,
    CodeBlock,
    ListFormatting,
    FileAccess,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DirectoryNaming => "directory-naming",
            Category::BilingualPair => "bilingual-pair",
            Category::ParallelStructure => "parallel-structure",
            Category::LanguageLink => "language-link",
            Category::RequiredSection => "required-section",
            Category::NavigationLink => "navigation-link",
            Category::NavigationConsistency => "navigation-consistency",
            Category::HeadingHierarchy => "heading-hierarchy",
            Category::CodeBlock => "code-block",
            Category::ListFormatting => "list-formatting",
            Category::FileAccess => "file-access",
        }
    }
}

/// A single reported deviation from an expected structural or
/// formatting rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    pub fn error(file: impl Into<PathBuf>, category: Category, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            category,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn error_at(
        file: impl Into<PathBuf>,
        line: usize,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line),
            ..Self::error(file, category, message)
        }
    }

    pub fn warning(
        file: impl Into<PathBuf>,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line: None,
            category,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn warning_at(
        file: impl Into<PathBuf>,
        line: usize,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line),
            ..Self::warning(file, category, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Per-suite outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteOutcome {
    pub suite: CheckSuite,
    pub files_checked: usize,
    pub files_with_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    pub violations: Vec<Violation>,
}

impl SuiteOutcome {
    pub fn new(suite: CheckSuite) -> Self {
        Self {
            suite,
            files_checked: 0,
            files_with_issues: 0,
            errors: 0,
            warnings: 0,
            duration: Duration::ZERO,
            violations: Vec::new(),
        }
    }

    pub fn add_violation(&mut self, violation: Violation) {
        match violation.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        self.violations.push(violation);
    }

    pub fn extend(&mut self, violations: Vec<Violation>) {
        for violation in violations {
            self.add_violation(violation);
        }
    }

    /// Sort violations into a stable order and derive per-file counts.
    /// Filesystem enumeration order must never leak into the report.
    pub fn finish(&mut self) {
        self.violations.sort_by(|a, b| {
            (&a.file, a.line.unwrap_or(0), a.category)
                .cmp(&(&b.file, b.line.unwrap_or(0), b.category))
        });

        let mut files: Vec<&PathBuf> = self.violations.iter().map(|v| &v.file).collect();
        files.sort();
        files.dedup();
        self.files_with_issues = files.len();
    }

    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Complete validation report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub timestamp: String,
    pub total_suites: usize,
    pub total_files_checked: usize,
    pub total_files_with_issues: usize,
    pub total_violations: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    #[serde(serialize_with = "serialize_duration", deserialize_with = "deserialize_duration")]
    pub total_duration: Duration,
    pub suite_outcomes: Vec<SuiteOutcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_suites: 0,
            total_files_checked: 0,
            total_files_with_issues: 0,
            total_violations: 0,
            total_errors: 0,
            total_warnings: 0,
            total_duration: Duration::ZERO,
            suite_outcomes: Vec::new(),
        }
    }

    pub fn add_suite_outcome(&mut self, outcome: SuiteOutcome) {
        self.total_suites += 1;
        self.total_files_checked += outcome.files_checked;
        self.total_files_with_issues += outcome.files_with_issues;
        self.total_violations += outcome.violations.len();
        self.total_errors += outcome.errors;
        self.total_warnings += outcome.warnings;
        self.total_duration += outcome.duration;
        self.suite_outcomes.push(outcome);
    }

    /// A run passes when no error-severity violation exists anywhere
    pub fn passed(&self) -> bool {
        self.total_errors == 0
    }

    pub fn has_failures(&self) -> bool {
        !self.passed()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
