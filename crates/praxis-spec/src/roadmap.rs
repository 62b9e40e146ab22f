use regex::Regex;

use crate::cursor::LineCursor;
use crate::model::{Level, Project, ProjectDetails};

/// Opening marker of a generated summary block in the roadmap.
pub const SUMMARY_OPEN: &str = "<!-- praxis:checklist -->";
/// Closing marker of a generated summary block in the roadmap.
pub const SUMMARY_CLOSE: &str = "<!-- /praxis:checklist -->";

/// Detail labels recognized in project bodies.
///
/// Each label is matched case-insensitively at the start of the trimmed line
/// (after bullet and emphasis markers are stripped); both the straight and
/// the curly apostrophe spelling are accepted. Only the first matching line
/// per label is used.
const WHAT_LABELS: [&str; 2] = ["what you'll build", "what you\u{2019}ll build"];
const SKILLS_LABELS: [&str; 1] = ["skills"];
const MILESTONES_LABELS: [&str; 1] = ["milestones"];
const STRETCH_LABELS: [&str; 1] = ["stretch goals"];

/// Roadmap document parser.
///
/// A level heading is an H2 of the form `## Level <N> - <Name>` (an em or en
/// dash is accepted in place of the hyphen); a project
/// heading is an H3 of the form `### <n>. <Title>`. A heading's body runs up
/// to (not including) the next heading of equal-or-higher priority. Lines
/// matching no pattern are skipped.
pub struct RoadmapParser {
    patterns: RoadmapPatterns,
}

struct RoadmapPatterns {
    level: Regex,
    project: Regex,
}

impl RoadmapParser {
    pub fn new() -> Self {
        Self {
            patterns: RoadmapPatterns {
                level: Regex::new(r"^##\s+Level\s+(\d+)\s*[\u{2014}\u{2013}-]+\s*(.+?)\s*$")
                    .unwrap(),
                project: Regex::new(r"^###\s+(\d+)\.\s+(.+?)\s*$").unwrap(),
            },
        }
    }

    /// Parse the roadmap into levels. An input with no level headings yields
    /// an empty list; the caller decides whether that is fatal.
    pub fn parse(&self, content: &str) -> Vec<Level> {
        let mut cursor = LineCursor::new(content);
        let mut levels = Vec::new();

        while let Some(line) = cursor.next_line() {
            if let Some(caps) = self.patterns.level.captures(line) {
                let number = caps[1].parse().unwrap_or(0);
                let name = caps[2].to_string();
                levels.push(self.parse_level(&mut cursor, number, name));
            }
        }

        levels
    }

    /// Parse a level body: description lines, then projects, stopping at the
    /// next level heading.
    fn parse_level(&self, cursor: &mut LineCursor, number: u32, name: String) -> Level {
        let mut level = Level {
            number,
            name,
            description: Vec::new(),
            projects: Vec::new(),
        };
        let mut in_summary = false;

        while let Some(line) = cursor.next_line() {
            if self.patterns.level.is_match(line) || line.starts_with("# ") {
                cursor.unread();
                break;
            }
            // Generated summary blocks are output, not source; skip them.
            if line.trim() == SUMMARY_OPEN {
                in_summary = true;
                continue;
            }
            if line.trim() == SUMMARY_CLOSE {
                in_summary = false;
                continue;
            }
            if in_summary {
                continue;
            }
            if let Some(caps) = self.patterns.project.captures(line) {
                let id = caps[1].parse().unwrap_or(0);
                let title = caps[2].to_string();
                level.projects.push(self.parse_project(cursor, id, title));
                continue;
            }
            if level.projects.is_empty() {
                level.description.push(line.to_string());
            }
        }

        level
    }

    /// Parse a project body, stopping at the next project or level heading.
    fn parse_project(&self, cursor: &mut LineCursor, id: u32, title: String) -> Project {
        let mut body = Vec::new();

        while let Some(line) = cursor.next_line() {
            if line.starts_with("### ") || line.starts_with("## ") || line.starts_with("# ") {
                cursor.unread();
                break;
            }
            body.push(line.to_string());
        }

        let details = extract_details(&body);
        Project {
            id,
            title,
            body,
            details,
        }
    }

    /// Rewrite the roadmap content, replacing the summary block under each
    /// level heading. Existing blocks are stripped first, which makes the
    /// rewrite idempotent. The inserted block is exactly four lines (a blank
    /// line, the open marker, the summary, the close marker); every
    /// hand-authored line passes through byte-identical.
    pub fn insert_summaries(&self, content: &str, levels: &[Level]) -> String {
        let stripped = strip_summaries(content);
        let mut out: Vec<String> = Vec::with_capacity(stripped.len() + levels.len() * 4);

        for line in stripped {
            let caps = self.patterns.level.captures(&line).map(|c| c[1].to_string());
            out.push(line);
            if let Some(number) = caps.and_then(|n| n.parse::<u32>().ok()) {
                if let Some(level) = levels.iter().find(|l| l.number == number) {
                    out.push(String::new());
                    out.push(SUMMARY_OPEN.to_string());
                    out.push(level_summary_line(level));
                    out.push(SUMMARY_CLOSE.to_string());
                }
            }
        }

        let mut result = out.join("\n");
        result.push('\n');
        result
    }
}

impl Default for RoadmapParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line summary placed under a level heading.
fn level_summary_line(level: &Level) -> String {
    let count = level.projects.len();
    let noun = if count == 1 { "project" } else { "projects" };
    let path = format!("levels/level-{}/CHECKLIST.md", level.number);
    format!("> {} {} \u{2014} tracked in [{}]({})", count, noun, path, path)
}

/// Remove every generated summary block: the marker pair, its contents, and
/// the single blank line the generator places before the open marker. Lines
/// outside the blocks are untouched.
fn strip_summaries(content: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        if line.trim() == SUMMARY_OPEN {
            if out.last().is_some_and(|l| l.is_empty()) {
                out.pop();
            }
            for inner in lines.by_ref() {
                if inner.trim() == SUMMARY_CLOSE {
                    break;
                }
            }
            continue;
        }
        out.push(line.to_string());
    }

    out
}

/// Extract single-line details from a project body.
///
/// For each label, the first line whose trimmed text starts with it wins;
/// the value is the remainder after the label and colon.
fn extract_details(body: &[String]) -> ProjectDetails {
    let mut details = ProjectDetails::default();

    for line in body {
        let text = line.trim().trim_start_matches("- ").replace("**", "");
        let lower = text.to_lowercase();

        if details.what_you_build.is_none() {
            if let Some(value) = match_label(&text, &lower, &WHAT_LABELS) {
                details.what_you_build = Some(value);
                continue;
            }
        }
        if details.skills.is_none() {
            if let Some(value) = match_label(&text, &lower, &SKILLS_LABELS) {
                details.skills = Some(value);
                continue;
            }
        }
        if details.milestones.is_none() {
            if let Some(value) = match_label(&text, &lower, &MILESTONES_LABELS) {
                details.milestones = Some(value);
                continue;
            }
        }
        if details.stretch_goals.is_none() {
            if let Some(value) = match_label(&text, &lower, &STRETCH_LABELS) {
                details.stretch_goals = Some(value);
            }
        }
    }

    details
}

/// Match one of the label spellings at the start of the line and return the
/// value after it. A leading colon is stripped, twice if doubled.
fn match_label(text: &str, lower: &str, labels: &[&str]) -> Option<String> {
    for label in labels {
        if lower.starts_with(label) {
            let mut rest = text[label.len()..].trim_start();
            for _ in 0..2 {
                rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
            }
            if rest.is_empty() {
                return None;
            }
            return Some(rest.to_string());
        }
    }
    None
}
