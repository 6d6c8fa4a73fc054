// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Validation configuration system

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::types::CheckSuite;

/// Directory names skipped at any depth of the walk
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", ".git", "validation", "solutions", "starter"];

/// Default-language lesson file name
pub const DEFAULT_PRIMARY_README: &str = "README.md";

/// Alternate-language lesson file name
pub const DEFAULT_SECONDARY_README: &str = "README_ID.md";

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Module root to validate
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Check suites to run
    pub suites: Vec<CheckSuite>,
    /// Directory names excluded from the walk
    pub excluded_dirs: Vec<String>,
    /// Default-language lesson file name
    pub primary_readme: String,
    /// Alternate-language lesson file name
    pub secondary_readme: String,
    /// Output directory for report artifacts
    pub output_dir: PathBuf,
    /// Whether to stop after the first suite with errors
    pub fail_fast: bool,
    /// Verbose output
    pub verbose: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            suites: CheckSuite::all().to_vec(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            primary_readme: DEFAULT_PRIMARY_README.to_string(),
            secondary_readme: DEFAULT_SECONDARY_README.to_string(),
            output_dir: PathBuf::from("reports"),
            fail_fast: false,
            verbose: false,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from("lessonlint.toml").exists() {
            Self::from_file("lessonlint.toml")?
        } else {
            Self::default()
        };

        // Apply environment variable overrides
        if let Ok(verbose) = std::env::var("LESSONLINT_VERBOSE") {
            config.verbose = verbose.parse().unwrap_or(false);
        }

        if let Ok(output_dir) = std::env::var("LESSONLINT_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Convenience constructor for validating one root with defaults
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Check if a suite should be run
    pub fn should_run_suite(&self, suite: CheckSuite) -> bool {
        self.suites.contains(&suite) || self.suites.is_empty()
    }

    /// Check if a directory name is excluded from the walk
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|excluded| excluded == name)
    }
}
