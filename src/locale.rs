// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Localized label tables for section and navigation-link matching
//!
//! Canonical identifiers map to the label strings accepted in each
//! supported language (English and Indonesian). Adding a language is a
//! data change here, not a code change in the checkers.

/// Canonical lesson section identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    LearningObjectives,
    Prerequisites,
    NextSteps,
    SourceAttribution,
    BestPractices,
    CommonMistakes,
}

impl Section {
    /// Sections every lesson file must carry
    pub const MANDATORY: [Section; 5] = [
        Section::Overview,
        Section::LearningObjectives,
        Section::Prerequisites,
        Section::NextSteps,
        Section::SourceAttribution,
    ];

    /// At least one of these must be present per lesson file
    pub const ANY_OF: [Section; 2] = [Section::BestPractices, Section::CommonMistakes];

    /// Canonical (English) name, used in violation messages
    pub fn name(&self) -> &'static str {
        self.labels()[0]
    }

    /// Accepted localized labels, canonical label first
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Section::Overview => &["Overview", "Gambaran Umum"],
            Section::LearningObjectives => &["Learning Objectives", "Tujuan Pembelajaran"],
            Section::Prerequisites => &["Prerequisites", "Prasyarat"],
            Section::NextSteps => &["Next Steps", "Langkah Selanjutnya"],
            Section::SourceAttribution => &["Source Attribution", "Atribusi Sumber"],
            Section::BestPractices => &["Best Practices", "Praktik Terbaik"],
            Section::CommonMistakes => &["Common Mistakes", "Kesalahan Umum"],
        }
    }

    /// Case-insensitive match against a heading's text. Headings may
    /// carry decoration around the label (numbering, emoji), so this
    /// is a containment check, not an equality check.
    pub fn matches(&self, heading_text: &str) -> bool {
        let haystack = heading_text.to_lowercase();
        self.labels()
            .iter()
            .any(|label| haystack.contains(&label.to_lowercase()))
    }
}

/// Canonical navigation-link identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLabel {
    Previous,
    Next,
    ModuleHome,
}

impl NavLabel {
    pub fn name(&self) -> &'static str {
        self.labels()[0]
    }

    /// Accepted localized labels, canonical label first
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            NavLabel::Previous => &["Previous", "Sebelumnya"],
            NavLabel::Next => &["Next", "Selanjutnya", "Berikutnya"],
            NavLabel::ModuleHome => &["Module Home", "Beranda Modul"],
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.labels()
            .iter()
            .any(|label| haystack.contains(&label.to_lowercase()))
    }
}

/// Markers identifying the language-switch link list a translated
/// file must carry
pub const LANGUAGE_SWITCH_MARKERS: &[&str] = &["Language", "Bahasa"];

/// True if the given text carries a recognizable language-switch marker
pub fn has_language_switch_marker(text: &str) -> bool {
    let haystack = text.to_lowercase();
    LANGUAGE_SWITCH_MARKERS
        .iter()
        .any(|marker| haystack.contains(&marker.to_lowercase()))
}
