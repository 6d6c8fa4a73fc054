// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Lessonlint Developers

//! Navigation link checks: extraction, completeness over the lesson
//! sequence, and previous/next symmetry between adjacent lessons

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::read_markdown;
use crate::locale::NavLabel;
use crate::validation::{Category, DocDiscovery, LessonDir, ValidationConfig, Violation};

/// `[text](target)` inline link
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is invalid"));

/// One labeled navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    pub target: String,
    pub line: usize,
}

/// The navigation links found in one lesson file
#[derive(Debug, Clone, Default)]
pub struct NavigationLinks {
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    pub module_home: Option<NavLink>,
}

/// Scan file content for labeled Previous/Next/Module-Home links.
/// A link is classified by its own text first; when a line carries a
/// single unclassified link, the surrounding line text is consulted,
/// which picks up the `**Previous**: [title](target)` layout.
pub fn extract_navigation_links(content: &str) -> NavigationLinks {
    let mut links = NavigationLinks::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let found: Vec<(NavLink, usize)> = LINK_RE
            .captures_iter(line)
            .map(|caps| {
                let link = NavLink {
                    text: caps[1].trim().to_string(),
                    target: caps[2].trim().to_string(),
                    line: line_number,
                };
                (link, caps.get(0).map(|m| m.start()).unwrap_or(0))
            })
            .collect();
        if found.is_empty() {
            continue;
        }

        let mut unclassified = Vec::new();
        for (link, start) in found {
            if !classify(&mut links, &link.text, &link) {
                unclassified.push((link, start));
            }
        }

        // Label preceding the link, e.g. `**Next**: [Structs](...)`
        if let [(link, start)] = unclassified.as_slice() {
            classify(&mut links, &line[..*start], link);
        }
    }

    links
}

/// Assign a link to the first empty slot whose label matches the given
/// text. Module Home is tried first so "Back to Module Home" never
/// lands in another slot.
fn classify(links: &mut NavigationLinks, text: &str, link: &NavLink) -> bool {
    let slots: [(NavLabel, &mut Option<NavLink>); 3] = [
        (NavLabel::ModuleHome, &mut links.module_home),
        (NavLabel::Previous, &mut links.previous),
        (NavLabel::Next, &mut links.next),
    ];
    for (label, slot) in slots {
        if label.matches(text) {
            if slot.is_none() {
                *slot = Some(link.clone());
            }
            return true;
        }
    }
    false
}

/// Directory a navigation target points at, e.g.
/// `../02-state/README.md` → `02-state`. `None` when the target stays
/// in the current directory or climbs out of the module.
pub fn target_directory(target: &str) -> Option<String> {
    let path = target.split(['#', '?']).next().unwrap_or(target);
    let mut components: Vec<&str> = path
        .split('/')
        .filter(|component| !component.is_empty() && *component != "." && *component != "..")
        .collect();
    if let Some(last) = components.last() {
        if last.contains('.') {
            components.pop();
        }
    }
    components.last().map(|component| component.to_string())
}

struct FileNav {
    file: PathBuf,
    links: NavigationLinks,
}

struct LessonNav {
    name: String,
    primary: Option<FileNav>,
    secondary: Option<FileNav>,
}

impl LessonNav {
    fn files(&self) -> impl Iterator<Item = &FileNav> {
        self.primary.iter().chain(self.secondary.iter())
    }
}

fn collect_lesson_navigation(
    config: &ValidationConfig,
    lessons: &[LessonDir],
    violations: &mut Vec<Violation>,
) -> Vec<LessonNav> {
    lessons
        .iter()
        .map(|lesson| {
            let pair = DocDiscovery::readme_pair(config, &lesson.path);
            let mut load = |file: Option<PathBuf>| {
                let file = file?;
                let text = read_markdown(&file, violations)?;
                Some(FileNav {
                    file,
                    links: extract_navigation_links(&text),
                })
            };
            LessonNav {
                name: lesson.name.clone(),
                primary: load(pair.primary),
                secondary: load(pair.secondary),
            }
        })
        .collect()
}

/// Completeness over the ordered lesson sequence: module-home always,
/// previous always (its target is only constrained for non-first
/// lessons), next for every lesson but the last.
pub fn validate_navigation_completeness(
    config: &ValidationConfig,
    lessons: &[LessonDir],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let navs = collect_lesson_navigation(config, lessons, &mut violations);
    let last = navs.len().saturating_sub(1);

    for (position, nav) in navs.iter().enumerate() {
        for file_nav in nav.files() {
            if file_nav.links.module_home.is_none() {
                violations.push(Violation::error(
                    &file_nav.file,
                    Category::NavigationLink,
                    "missing module home link",
                ));
            }

            match &file_nav.links.previous {
                None => violations.push(Violation::error(
                    &file_nav.file,
                    Category::NavigationLink,
                    "missing previous link",
                )),
                Some(link) if position > 0 => {
                    let expected = &navs[position - 1].name;
                    let found = target_directory(&link.target);
                    if found.as_deref() != Some(expected.as_str()) {
                        violations.push(Violation::error_at(
                            &file_nav.file,
                            link.line,
                            Category::NavigationLink,
                            format!(
                                "previous link targets '{}' but the preceding lesson is '{}'",
                                link.target, expected
                            ),
                        ));
                    }
                }
                Some(_) => {}
            }

            if position < last {
                let expected = &navs[position + 1].name;
                match &file_nav.links.next {
                    None => violations.push(Violation::error(
                        &file_nav.file,
                        Category::NavigationLink,
                        "missing next link",
                    )),
                    Some(link) => {
                        let found = target_directory(&link.target);
                        if found.as_deref() != Some(expected.as_str()) {
                            violations.push(Violation::error_at(
                                &file_nav.file,
                                link.line,
                                Category::NavigationLink,
                                format!(
                                    "next link targets '{}' but the following lesson is '{}'",
                                    link.target, expected
                                ),
                            ));
                        }
                    }
                }
            }
        }
    }

    violations
}

/// Symmetry between adjacent lessons: if A's next points anywhere, it
/// must point at B, and B's previous must point back at A. Checked per
/// language so both files involved in a break are reported.
pub fn validate_navigation_consistency(
    config: &ValidationConfig,
    lessons: &[LessonDir],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let navs = collect_lesson_navigation(config, lessons, &mut violations);

    for window in navs.windows(2) {
        let (current, following) = (&window[0], &window[1]);

        let sides = [
            (current.primary.as_ref(), following.primary.as_ref()),
            (current.secondary.as_ref(), following.secondary.as_ref()),
        ];
        for (current_file, following_file) in sides {
            if let Some(file_nav) = current_file {
                if let Some(link) = &file_nav.links.next {
                    if target_directory(&link.target).as_deref() != Some(following.name.as_str()) {
                        violations.push(Violation::error_at(
                            &file_nav.file,
                            link.line,
                            Category::NavigationConsistency,
                            format!(
                                "next link targets '{}', breaking symmetry with the following \
                                 lesson '{}'",
                                link.target, following.name
                            ),
                        ));
                    }
                }
            }
            if let Some(file_nav) = following_file {
                if let Some(link) = &file_nav.links.previous {
                    if target_directory(&link.target).as_deref() != Some(current.name.as_str()) {
                        violations.push(Violation::error_at(
                            &file_nav.file,
                            link.line,
                            Category::NavigationConsistency,
                            format!(
                                "previous link targets '{}', breaking symmetry with the preceding \
                                 lesson '{}'",
                                link.target, current.name
                            ),
                        ));
                    }
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_by_link_text() {
        let content = "\
# Lesson

[← Previous: Intro](../01-intro/README.md) | [Next: State →](../03-state/README.md)

[Module Home](../README.md)
";
        let links = extract_navigation_links(content);
        assert_eq!(links.previous.unwrap().target, "../01-intro/README.md");
        assert_eq!(links.next.unwrap().target, "../03-state/README.md");
        assert_eq!(links.module_home.unwrap().target, "../README.md");
    }

    #[test]
    fn test_extract_links_by_line_label() {
        let content = "\
**Sebelumnya**: [Pengenalan](../01-intro/README_ID.md)

**Selanjutnya**: [State](../03-state/README_ID.md)

**Beranda Modul**: [Modul](../README_ID.md)
";
        let links = extract_navigation_links(content);
        assert!(links.previous.is_some());
        assert!(links.next.is_some());
        assert!(links.module_home.is_some());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let content = "[Next](a/README.md)\n[Next again](b/README.md)\n";
        let links = extract_navigation_links(content);
        assert_eq!(links.next.unwrap().target, "a/README.md");
    }

    #[test]
    fn test_target_directory_extraction() {
        assert_eq!(target_directory("../02-state/README.md").as_deref(), Some("02-state"));
        assert_eq!(target_directory("../02-state/").as_deref(), Some("02-state"));
        assert_eq!(target_directory("02-state/README_ID.md#top").as_deref(), Some("02-state"));
        assert_eq!(target_directory("../README.md"), None);
        assert_eq!(target_directory("README.md"), None);
    }
}
