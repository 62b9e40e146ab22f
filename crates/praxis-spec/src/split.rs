use regex::Regex;

use crate::cursor::LineCursor;

/// Which master document dialect is being split.
///
/// The level 1 master numbers its project headings `## N. Title`; the level 5
/// master uses `## N) Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterDialect {
    Level1,
    Level5,
}

/// One extracted project section: the heading line plus its body up to the
/// next heading of equal-or-higher priority.
#[derive(Debug, Clone)]
pub struct SplitSection {
    pub id: u32,
    pub title: String,
    /// Section lines, heading first
    pub lines: Vec<String>,
}

impl SplitSection {
    /// Section content as written to the project's `SPEC.md`.
    pub fn content(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Splits a master spec document into per-project sections.
pub struct MasterSplitter {
    heading: Regex,
}

impl MasterSplitter {
    pub fn new(dialect: MasterDialect) -> Self {
        let heading = match dialect {
            MasterDialect::Level1 => Regex::new(r"^##\s+(\d+)\.\s+(.+?)\s*$").unwrap(),
            MasterDialect::Level5 => Regex::new(r"^##\s+(\d+)\)\s+(.+?)\s*$").unwrap(),
        };
        Self { heading }
    }

    /// Extract sections in document order. Content before the first project
    /// heading (document title, preamble) belongs to no section. An input
    /// with no matching headings yields an empty list; nothing to do is not
    /// an error.
    pub fn split(&self, content: &str) -> Vec<SplitSection> {
        let mut cursor = LineCursor::new(content);
        let mut sections = Vec::new();

        while let Some(line) = cursor.next_line() {
            if let Some(caps) = self.heading.captures(line) {
                let id = caps[1].parse().unwrap_or(0);
                let title = caps[2].to_string();
                let mut lines = vec![line.to_string()];

                while let Some(body_line) = cursor.next_line() {
                    if body_line.starts_with("## ") || body_line.starts_with("# ") {
                        cursor.unread();
                        break;
                    }
                    lines.push(body_line.to_string());
                }

                sections.push(SplitSection { id, title, lines });
            }
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL1_MASTER: &str = "\
# Level 1 Specs

Preamble prose.

## 1. Command-Line Calculator

### Required Features

- **Parse input** \u{2014} **Difficulty 2/5**

## 2. Guess The Number

Body of project two.

More body.
";

    const LEVEL5_MASTER: &str = "\
# Level 5 Specs

## 1) HTTP Server

Body one.

## 2) Key-Value Store

Body two.
";

    #[test]
    fn test_split_level5() {
        let sections = MasterSplitter::new(MasterDialect::Level5).split(LEVEL5_MASTER);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, 1);
        assert_eq!(sections[0].title, "HTTP Server");
        assert_eq!(sections[0].lines[0], "## 1) HTTP Server");
        assert!(sections[0].lines.iter().any(|l| l == "Body one."));
        assert_eq!(sections[1].title, "Key-Value Store");
    }

    #[test]
    fn test_dialects_do_not_cross_match() {
        let sections = MasterSplitter::new(MasterDialect::Level1).split(LEVEL5_MASTER);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_split_level1_keeps_lower_headings() {
        // An H3 inside the body has lower priority and stays in the section.
        let sections = MasterSplitter::new(MasterDialect::Level1).split(LEVEL1_MASTER);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Command-Line Calculator");
        assert!(sections[0]
            .lines
            .iter()
            .any(|l| l.contains("Required Features")));
        assert!(sections[1].lines.iter().any(|l| l == "More body."));
    }

    #[test]
    fn test_round_trip_reconstructs_sections() {
        let sections = MasterSplitter::new(MasterDialect::Level5).split(LEVEL5_MASTER);
        let joined: String = sections.iter().map(|s| s.content()).collect();

        // Every section line appears exactly once and in original order.
        let mut last_pos = 0;
        for section in &sections {
            for line in &section.lines {
                let pos = LEVEL5_MASTER[last_pos..]
                    .find(line.as_str())
                    .expect("line missing from source");
                last_pos += pos + line.len();
            }
        }

        // No content invented: each non-empty output line came from the source.
        for line in joined.lines().filter(|l| !l.is_empty()) {
            assert!(LEVEL5_MASTER.contains(line));
        }
    }

    #[test]
    fn test_no_headings_yields_empty() {
        let sections =
            MasterSplitter::new(MasterDialect::Level1).split("# Title\n\nNo projects here.\n");
        assert!(sections.is_empty());
    }
}
