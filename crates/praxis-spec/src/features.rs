use regex::Regex;

use crate::cursor::LineCursor;
use crate::model::{Feature, FeatureSection};

/// A parsed per-project `SPEC.md` document.
#[derive(Debug, Clone, Default)]
pub struct SpecDoc {
    /// Title from the first H1, if any
    pub title: Option<String>,
    pub required: Vec<Feature>,
    pub bonus: Vec<Feature>,
}

impl SpecDoc {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.bonus.is_empty()
    }
}

/// Parser for per-project spec documents.
///
/// Two feature shapes are recognized inside a `Required Features` or
/// `Bonus Features` section:
///
/// - bullet features: `- **Title** - **Difficulty d/5**` (level 1 dialect),
///   with an acceptance block introduced by `- **Acceptance criteria:**`;
/// - numbered feature headings: `### n) Title - Difficulty d/5`
///   (levels 2-5 dialect), with the same acceptance block in the body.
///
/// An em or en dash is accepted wherever the hyphen separator appears.
///
/// If a section label recurs, only the first occurrence is honored; the
/// second terminates that block. Lines matching neither shape are skipped.
pub struct SpecDocParser {
    patterns: FeaturePatterns,
}

struct FeaturePatterns {
    title: Regex,
    section: Regex,
    feature_bullet: Regex,
    feature_heading: Regex,
    acceptance: Regex,
}

impl SpecDocParser {
    pub fn new() -> Self {
        Self {
            patterns: FeaturePatterns {
                title: Regex::new(r"^#\s+(?:\d+[.)]\s+)?(.+?)\s*$").unwrap(),
                section: Regex::new(r"^#{2,4}\s+(Required|Bonus)\s+Features\s*$").unwrap(),
                feature_bullet: Regex::new(
                    r"^-\s+\*\*(.+?)\*\*\s+[\u{2014}\u{2013}-]+\s+\*\*Difficulty\s+(\d)/5\*\*\s*$",
                )
                .unwrap(),
                feature_heading: Regex::new(
                    r"^#{3,4}\s+\d+\)\s+(.+?)\s+[\u{2014}\u{2013}-]+\s+Difficulty\s+(\d)/5\s*$",
                )
                .unwrap(),
                acceptance: Regex::new(r"^-\s+\*\*Acceptance criteria:\*\*\s*$").unwrap(),
            },
        }
    }

    pub fn parse(&self, content: &str) -> SpecDoc {
        let mut cursor = LineCursor::new(content);
        let mut doc = SpecDoc::default();
        let mut seen_required = false;
        let mut seen_bonus = false;
        let mut current: Option<FeatureSection> = None;

        while let Some(line) = cursor.next_line() {
            if doc.title.is_none() && !line.starts_with("##") {
                if let Some(caps) = self.patterns.title.captures(line) {
                    doc.title = Some(caps[1].to_string());
                    continue;
                }
            }

            if let Some(caps) = self.patterns.section.captures(line) {
                let section = match &caps[1] {
                    "Required" => FeatureSection::Required,
                    _ => FeatureSection::Bonus,
                };
                let seen = match section {
                    FeatureSection::Required => &mut seen_required,
                    FeatureSection::Bonus => &mut seen_bonus,
                };
                // A duplicate section heading terminates the block instead
                // of producing duplicate entries.
                current = if *seen {
                    None
                } else {
                    *seen = true;
                    Some(section)
                };
                continue;
            }

            let Some(section) = current else { continue };

            if let Some(caps) = self.patterns.feature_bullet.captures(line) {
                let feature = self.parse_feature(
                    &mut cursor,
                    section,
                    caps[1].to_string(),
                    format!("{}/5", &caps[2]),
                );
                self.push(&mut doc, feature);
            } else if let Some(caps) = self.patterns.feature_heading.captures(line) {
                let feature = self.parse_feature(
                    &mut cursor,
                    section,
                    caps[1].to_string(),
                    format!("{}/5", &caps[2]),
                );
                self.push(&mut doc, feature);
            } else if line.starts_with("## ") || line.starts_with("# ") {
                // Any other H1/H2 closes the current section.
                current = None;
            }
        }

        doc
    }

    fn push(&self, doc: &mut SpecDoc, feature: Feature) {
        match feature.section {
            FeatureSection::Required => doc.required.push(feature),
            FeatureSection::Bonus => doc.bonus.push(feature),
        }
    }

    /// Scan forward from a feature line for its acceptance block. The scan
    /// stops (and unreads) at the next feature, section heading, or any other
    /// heading, so a feature without criteria stays empty.
    fn parse_feature(
        &self,
        cursor: &mut LineCursor,
        section: FeatureSection,
        title: String,
        difficulty: String,
    ) -> Feature {
        let mut criteria = Vec::new();

        while let Some(line) = cursor.next_line() {
            if self.is_boundary(line) {
                cursor.unread();
                break;
            }
            if self.patterns.acceptance.is_match(line.trim()) {
                criteria = self.collect_criteria(cursor);
                break;
            }
        }

        Feature {
            section,
            title,
            difficulty,
            criteria,
        }
    }

    /// Collect bullet lines after the acceptance label. Blank lines are
    /// skipped; the next non-bullet non-blank line or the next feature stops
    /// collection. Helper-label lines are excluded so headers never leak in
    /// as content.
    fn collect_criteria(&self, cursor: &mut LineCursor) -> Vec<String> {
        let mut criteria = Vec::new();

        while let Some(line) = cursor.next_line() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if self.is_boundary(line) || !trimmed.starts_with("- ") {
                cursor.unread();
                break;
            }
            if is_helper_label(trimmed) {
                continue;
            }
            criteria.push(trimmed.trim_start_matches("- ").trim().to_string());
        }

        criteria
    }

    fn is_boundary(&self, line: &str) -> bool {
        let trimmed = line.trim();
        line.starts_with('#')
            || self.patterns.feature_bullet.is_match(trimmed)
            || self.patterns.feature_heading.is_match(line)
    }
}

impl Default for SpecDocParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines that label surrounding content rather than being content.
fn is_helper_label(trimmed: &str) -> bool {
    let lower = trimmed.trim_start_matches("- ").replace("**", "").to_lowercase();
    lower.starts_with("what it teaches") || lower.starts_with("acceptance criteria")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLET_SPEC: &str = "\
# 1. Command-Line Calculator

## Required Features

- **Parse input** \u{2014} **Difficulty 2/5**
  - **What it teaches:** tokenizing a line
  - **Acceptance criteria:**
    - splits an expression into operands and operator
    - rejects empty input with a message

- **Basic operations** \u{2014} **Difficulty 1/5**
  - **Acceptance criteria:**
    - supports add, subtract, multiply, divide

## Bonus Features

- **Command aliases** \u{2014} **Difficulty 3/5**
  - **Acceptance criteria:**
    - accepts `q` for quit
";

    const HEADING_SPEC: &str = "\
# 3) Tic-Tac-Toe

## Required Features

### 1) Board rendering \u{2014} Difficulty 2/5

Draw the grid after every move.

- **Acceptance criteria:**
  - prints a 3x3 grid with coordinates
  - redraws after each turn

### 2) Win detection \u{2014} Difficulty 3/5

- **Acceptance criteria:**
  - detects rows, columns, and diagonals

## Bonus Features

### 1) Computer opponent \u{2014} Difficulty 4/5

- **Acceptance criteria:**
  - never loses on a 3x3 board
";

    #[test]
    fn test_bullet_dialect() {
        let doc = SpecDocParser::new().parse(BULLET_SPEC);

        assert_eq!(doc.title.as_deref(), Some("Command-Line Calculator"));
        assert_eq!(doc.required.len(), 2);
        assert_eq!(doc.bonus.len(), 1);

        let parse = &doc.required[0];
        assert_eq!(parse.title, "Parse input");
        assert_eq!(parse.difficulty, "2/5");
        assert_eq!(parse.section, FeatureSection::Required);
        assert_eq!(
            parse.criteria,
            vec![
                "splits an expression into operands and operator",
                "rejects empty input with a message",
            ]
        );
    }

    #[test]
    fn test_heading_dialect() {
        let doc = SpecDocParser::new().parse(HEADING_SPEC);

        assert_eq!(doc.title.as_deref(), Some("Tic-Tac-Toe"));
        assert_eq!(doc.required.len(), 2);
        assert_eq!(doc.required[0].title, "Board rendering");
        assert_eq!(doc.required[0].difficulty, "2/5");
        assert_eq!(
            doc.required[0].criteria,
            vec!["prints a 3x3 grid with coordinates", "redraws after each turn"]
        );
        assert_eq!(doc.bonus.len(), 1);
        assert_eq!(doc.bonus[0].section, FeatureSection::Bonus);
        assert_eq!(doc.bonus[0].title, "Computer opponent");
    }

    #[test]
    fn test_single_feature_two_criteria_labels_excluded() {
        let body = "\
## Required Features

- **Parse input** \u{2014} **Difficulty 2/5**
  - **What it teaches:** tokenizing
  - **Acceptance criteria:**
    - first criterion
    - second criterion
";
        let doc = SpecDocParser::new().parse(body);

        assert_eq!(doc.required.len(), 1);
        let feature = &doc.required[0];
        assert_eq!(feature.criteria.len(), 2);
        assert_eq!(feature.criteria[0], "first criterion");
        assert_eq!(feature.criteria[1], "second criterion");
        assert!(!feature.criteria.iter().any(|c| c.to_lowercase().contains("teaches")));
    }

    #[test]
    fn test_criteria_stop_at_next_feature() {
        let body = "\
## Required Features

- **First** \u{2014} **Difficulty 1/5**
  - **Acceptance criteria:**
    - only criterion
- **Second** \u{2014} **Difficulty 2/5**
  - **Acceptance criteria:**
    - other criterion
";
        let doc = SpecDocParser::new().parse(body);

        assert_eq!(doc.required.len(), 2);
        assert_eq!(doc.required[0].criteria, vec!["only criterion"]);
        assert_eq!(doc.required[1].criteria, vec!["other criterion"]);
    }

    #[test]
    fn test_criteria_skip_blank_lines_stop_at_prose() {
        let body = "\
## Required Features

- **Feature** \u{2014} **Difficulty 1/5**
  - **Acceptance criteria:**
    - first

    - second

Some prose that ends the block.
    - not collected
";
        let doc = SpecDocParser::new().parse(body);

        assert_eq!(doc.required[0].criteria, vec!["first", "second"]);
    }

    #[test]
    fn test_feature_without_criteria() {
        let body = "\
## Required Features

- **Bare feature** \u{2014} **Difficulty 1/5**
- **Next** \u{2014} **Difficulty 2/5**
  - **Acceptance criteria:**
    - something
";
        let doc = SpecDocParser::new().parse(body);

        assert_eq!(doc.required.len(), 2);
        assert!(doc.required[0].criteria.is_empty());
        assert_eq!(doc.required[1].criteria, vec!["something"]);
    }

    #[test]
    fn test_duplicate_section_terminates_block() {
        let body = "\
## Required Features

- **Kept** \u{2014} **Difficulty 1/5**
  - **Acceptance criteria:**
    - a

## Required Features

- **Dropped** \u{2014} **Difficulty 1/5**
  - **Acceptance criteria:**
    - b
";
        let doc = SpecDocParser::new().parse(body);

        assert_eq!(doc.required.len(), 1);
        assert_eq!(doc.required[0].title, "Kept");
    }

    #[test]
    fn test_no_sections_yields_empty() {
        let doc = SpecDocParser::new().parse("# Title\n\nJust prose.\n");
        assert!(doc.is_empty());
        assert_eq!(doc.title.as_deref(), Some("Title"));
    }

    #[test]
    fn test_hyphen_accepted_for_dash() {
        let body = "\
## Required Features

- **Feature** - **Difficulty 4/5**
  - **Acceptance criteria:**
    - works
";
        let doc = SpecDocParser::new().parse(body);
        assert_eq!(doc.required.len(), 1);
        assert_eq!(doc.required[0].difficulty, "4/5");
    }
}
