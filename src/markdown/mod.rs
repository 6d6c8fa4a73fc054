// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Markdown structure extraction

pub mod extractor;

pub use extractor::{FencedBlock, Heading, LineIssue, ListItem, MarkdownStructure};
