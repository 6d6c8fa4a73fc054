// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Stateless checkers, one module per check suite
//!
//! Every checker is a pure function from discovered inputs to a
//! violation list; nothing here touches process state or exit codes.

pub mod content;
pub mod formatting;
pub mod navigation;
pub mod structure;

use std::fs;
use std::path::Path;

use crate::validation::{Category, Violation};

/// Read one file, converting a read failure into a `file-access`
/// violation so a single unreadable file never aborts the run.
pub(crate) fn read_markdown(path: &Path, violations: &mut Vec<Violation>) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            violations.push(Violation::error(
                path,
                Category::FileAccess,
                format!("failed to read file: {err}"),
            ));
            None
        }
    }
}
