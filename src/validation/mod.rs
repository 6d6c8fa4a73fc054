// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Unified validation system for curriculum documentation trees

pub mod config;
pub mod coordinator;
pub mod discovery;
pub mod reporter;
pub mod types;

pub use config::{
    ValidationConfig, DEFAULT_EXCLUDED_DIRS, DEFAULT_PRIMARY_README, DEFAULT_SECONDARY_README,
};
pub use coordinator::CheckCoordinator;
pub use discovery::{DocDiscovery, LessonDir, ModuleTree, ReadmePair};
pub use reporter::CheckReporter;
pub use types::{Category, CheckSuite, Severity, SuiteOutcome, ValidationReport, Violation};
