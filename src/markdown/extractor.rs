// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Regex-driven Markdown structure extraction
//!
//! Line-based scanning, not a CommonMark parser: headings, fenced code
//! blocks, and list items are recognized by named patterns, and fence
//! interiors are opaque to heading/list recognition.

use crate::validation::{Category, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// `## Heading text` — one to six hashes, then whitespace, then text
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is invalid"));

/// `##Heading` — hashes immediately followed by text
static MALFORMED_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}[^#\s]").expect("malformed heading pattern is invalid"));

/// `- item`, `* item`, `+ item`
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([-*+])\s+(.*)$").expect("unordered item pattern is invalid"));

/// `1. item`
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+\.)\s+(.*)$").expect("ordered item pattern is invalid"));

/// `-item` — marker with no following space. The char after the marker
/// must not repeat the marker, so `---` rules and `**bold**` stay out.
static UNORDERED_NO_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([-*+])([^\s*+-].*)$").expect("unordered no-space pattern is invalid")
});

/// `1.item`
static ORDERED_NO_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(\d+\.)(\S.*)$").expect("ordered no-space pattern is invalid")
});

/// One Markdown heading occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub line: usize,
}

/// One fenced code block. `end_line` is `None` for a block left open
/// at end of file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    pub start_line: usize,
    pub language: Option<String>,
    pub end_line: Option<usize>,
}

/// One list-item line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub line: usize,
    pub indent: usize,
    pub marker: String,
    pub content: String,
}

/// A malformed-syntax finding made during scanning, not yet bound to a
/// file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIssue {
    pub line: usize,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
}

/// Extracted structure of one Markdown document
#[derive(Debug, Clone, Default)]
pub struct MarkdownStructure {
    pub headings: Vec<Heading>,
    pub code_blocks: Vec<FencedBlock>,
    pub list_items: Vec<ListItem>,
    pub issues: Vec<LineIssue>,
}

impl MarkdownStructure {
    /// Scan raw file text in a single top-to-bottom pass
    pub fn scan(text: &str) -> Self {
        let mut structure = MarkdownStructure::default();
        let mut open_fence: Option<(usize, Option<String>)> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim_start();

            if trimmed.starts_with("```") {
                match open_fence.take() {
                    None => {
                        let tag = trimmed[3..].trim();
                        let language = (!tag.is_empty()).then(|| tag.to_string());
                        if language.is_none() {
                            structure.issues.push(LineIssue {
                                line,
                                category: Category::CodeBlock,
                                severity: Severity::Warning,
                                message: "code block is missing a language tag".to_string(),
                            });
                        }
                        open_fence = Some((line, language));
                    }
                    Some((start_line, language)) => {
                        // A closing fence is exactly three backticks
                        if trimmed.trim_end() != "```" {
                            structure.issues.push(LineIssue {
                                line,
                                category: Category::CodeBlock,
                                severity: Severity::Error,
                                message: "closing code fence has trailing characters".to_string(),
                            });
                        }
                        structure.code_blocks.push(FencedBlock {
                            start_line,
                            language,
                            end_line: Some(line),
                        });
                    }
                }
                continue;
            }

            // Fence interiors are opaque
            if open_fence.is_some() {
                continue;
            }

            if let Some(caps) = HEADING_RE.captures(raw_line) {
                structure.headings.push(Heading {
                    level: caps[1].len() as u8,
                    text: caps[2].trim().to_string(),
                    line,
                });
                continue;
            }

            if MALFORMED_HEADING_RE.is_match(raw_line) {
                structure.issues.push(LineIssue {
                    line,
                    category: Category::HeadingHierarchy,
                    severity: Severity::Error,
                    message: "missing space after # symbols".to_string(),
                });
                continue;
            }

            if let Some(caps) = UNORDERED_ITEM_RE
                .captures(raw_line)
                .or_else(|| ORDERED_ITEM_RE.captures(raw_line))
            {
                let indent = caps[1].len();
                if indent % 2 != 0 {
                    structure.issues.push(LineIssue {
                        line,
                        category: Category::ListFormatting,
                        severity: Severity::Warning,
                        message: format!("list indent of {indent} spaces is not a multiple of two"),
                    });
                }
                structure.list_items.push(ListItem {
                    line,
                    indent,
                    marker: caps[2].to_string(),
                    content: caps[3].to_string(),
                });
                continue;
            }

            if let Some(caps) = UNORDERED_NO_SPACE_RE
                .captures(raw_line)
                .or_else(|| ORDERED_NO_SPACE_RE.captures(raw_line))
            {
                structure.issues.push(LineIssue {
                    line,
                    category: Category::ListFormatting,
                    severity: Severity::Error,
                    message: format!("list marker '{}' is not followed by a space", &caps[2]),
                });
            }
        }

        if let Some((start_line, language)) = open_fence {
            structure.code_blocks.push(FencedBlock {
                start_line,
                language,
                end_line: None,
            });
            structure.issues.push(LineIssue {
                line: start_line,
                category: Category::CodeBlock,
                severity: Severity::Error,
                message: "code block opened but never closed".to_string(),
            });
        }

        structure
    }

    /// The ordered heading-level sequence, the structural similarity
    /// proxy between translations
    pub fn heading_levels(&self) -> Vec<u8> {
        self.headings.iter().map(|h| h.level).collect()
    }
}
