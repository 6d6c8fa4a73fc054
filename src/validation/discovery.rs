// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Module tree discovery
//!
//! One walk per run produces everything the checkers consume: the
//! immediate subdirectory names, the recursive directory list, the
//! ordered lesson sequence, and the Markdown file list. Excluded
//! directory names are skipped at any depth. All lists are sorted so
//! filesystem enumeration order never reaches a report.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

use super::config::ValidationConfig;

/// `NN-anything` — the numeric prefix that places a directory in the
/// lesson sequence. Full naming validation is stricter and lives in
/// the structure checker.
static LESSON_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(.+)$").expect("lesson prefix pattern is invalid"));

/// One numbered lesson directory
#[derive(Debug, Clone)]
pub struct LessonDir {
    pub name: String,
    pub path: PathBuf,
    pub index: u32,
}

/// The two language variants of one directory's README. Either side
/// may be absent; the pair invariant is checked by the structure
/// checker, not here.
#[derive(Debug, Clone)]
pub struct ReadmePair {
    pub directory: PathBuf,
    pub primary: Option<PathBuf>,
    pub secondary: Option<PathBuf>,
}

impl ReadmePair {
    pub fn is_complete(&self) -> bool {
        self.primary.is_some() && self.secondary.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// Everything discovered under one module root
#[derive(Debug, Clone)]
pub struct ModuleTree {
    pub root: PathBuf,
    /// Immediate subdirectory names, excluded names filtered, sorted
    pub top_level_dirs: Vec<String>,
    /// Recursive directory list, root included, sorted
    pub directories: Vec<PathBuf>,
    /// Lesson directories sorted by numeric prefix
    pub lessons: Vec<LessonDir>,
    /// All Markdown files under the root, sorted
    pub markdown_files: Vec<PathBuf>,
}

/// Module tree discovery system
pub struct DocDiscovery;

impl DocDiscovery {
    /// Walk the module root. Fails fast when the root itself is
    /// missing or unreadable; per-file problems are left to the
    /// checkers.
    pub fn discover(config: &ValidationConfig) -> Result<ModuleTree> {
        let root = &config.root;
        if !root.is_dir() {
            bail!(
                "module root {} does not exist or is not a directory",
                root.display()
            );
        }

        let mut top_level_dirs = Vec::new();
        let entries = fs::read_dir(root)
            .with_context(|| format!("Failed to read module root {}", root.display()))?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                if !config.is_excluded(&name) {
                    top_level_dirs.push(name);
                }
            }
        }
        top_level_dirs.sort();

        let mut directories = Vec::new();
        let mut markdown_files = Vec::new();
        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .file_name()
                    .to_str()
                    .map(|name| !config.is_excluded(name))
                    .unwrap_or(true)
        });
        for entry in walker.filter_map(|entry| entry.ok()) {
            let path = entry.path().to_path_buf();
            if entry.file_type().is_dir() {
                directories.push(path);
            } else if path.extension().map(|ext| ext == "md").unwrap_or(false) {
                markdown_files.push(path);
            }
        }
        directories.sort();
        markdown_files.sort();

        let mut lessons = Vec::new();
        for name in &top_level_dirs {
            if let Some(caps) = LESSON_PREFIX_RE.captures(name) {
                lessons.push(LessonDir {
                    name: name.clone(),
                    path: root.join(name),
                    index: caps[1].parse().unwrap_or(0),
                });
            }
        }
        lessons.sort_by(|a, b| (a.index, &a.name).cmp(&(b.index, &b.name)));

        Ok(ModuleTree {
            root: root.clone(),
            top_level_dirs,
            directories,
            lessons,
            markdown_files,
        })
    }

    /// Probe one directory for its README language variants
    pub fn readme_pair(config: &ValidationConfig, directory: &Path) -> ReadmePair {
        let primary = directory.join(&config.primary_readme);
        let secondary = directory.join(&config.secondary_readme);
        ReadmePair {
            directory: directory.to_path_buf(),
            primary: primary.is_file().then_some(primary),
            secondary: secondary.is_file().then_some(secondary),
        }
    }

    /// README pairs for every discovered directory, root included
    pub fn readme_pairs(config: &ValidationConfig, tree: &ModuleTree) -> Vec<ReadmePair> {
        tree.directories
            .iter()
            .map(|directory| Self::readme_pair(config, directory))
            .collect()
    }

    /// Existing lesson README files, both languages, in sequence order
    pub fn lesson_files(config: &ValidationConfig, tree: &ModuleTree) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for lesson in &tree.lessons {
            let pair = Self::readme_pair(config, &lesson.path);
            files.extend(pair.primary);
            files.extend(pair.secondary);
        }
        files
    }
}
