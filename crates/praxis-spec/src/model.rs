use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A top-level curriculum grouping containing multiple projects.
///
/// Levels are reconstructed from the roadmap document on every run; nothing
/// is persisted between runs except the files that get written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Level number (1-based)
    pub number: u32,
    /// Level name (text after the dash in the heading)
    pub name: String,
    /// Free-text description lines before the first project heading
    pub description: Vec<String>,
    /// Projects in document order
    pub projects: Vec<Project>,
}

/// One exercise/assignment unit with a title and descriptive body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Numeric id (1-based, from the heading)
    pub id: u32,
    /// Project title
    pub title: String,
    /// Body lines up to the next heading of equal-or-higher priority
    pub body: Vec<String>,
    /// Single-line details extracted from the body
    pub details: ProjectDetails,
}

/// Single-line project details from the roadmap.
///
/// Only the first matching line per label is used; multi-line values are not
/// supported by design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub what_you_build: Option<String>,
    pub skills: Option<String>,
    pub milestones: Option<String>,
    pub stretch_goals: Option<String>,
}

impl ProjectDetails {
    pub fn is_empty(&self) -> bool {
        self.what_you_build.is_none()
            && self.skills.is_none()
            && self.milestones.is_none()
            && self.stretch_goals.is_none()
    }
}

/// Which feature list of a spec a feature belongs to.
///
/// Every feature belongs to exactly one section of exactly one project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSection {
    Required,
    Bonus,
}

impl FeatureSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Bonus => "bonus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "required" => Some(Self::Required),
            "bonus" => Some(Self::Bonus),
            _ => None,
        }
    }
}

/// A required or bonus capability of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub section: FeatureSection,
    pub title: String,
    /// Difficulty rating as written, e.g. "3/5"
    pub difficulty: String,
    /// Acceptance-criterion strings in document order
    pub criteria: Vec<String>,
}

/// Inferred implementation status of a feature.
///
/// Variant order doubles as the checklist ordering: unimplemented work sorts
/// first, then partial, then done.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ImplStatus {
    #[default]
    Todo,
    Partial,
    Done,
}

impl ImplStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Partial => "partial",
            Self::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "partial" => Some(Self::Partial),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Checkbox marker used in rendered checklists.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Todo => "[ ]",
            Self::Partial => "[-]",
            Self::Done => "[x]",
        }
    }
}

/// Mapping from lowercased feature title to inferred status.
pub type StatusMap = HashMap<String, ImplStatus>;
