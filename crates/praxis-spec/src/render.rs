use crate::model::{Feature, ImplStatus, Level, StatusMap};

/// Render a per-project checklist.
///
/// Layout: title heading, an `Implementation Order` list, a `Tasks` section
/// with criteria sub-bullets, and a `Bonus` section when bonus features
/// exist. With a status map, required features are ordered todo first, then
/// partial, then done, ties broken alphabetically by title; otherwise they
/// keep document order. The output carries no trailing whitespace and ends
/// with exactly one newline: these files are diffed and regenerated, so the
/// formatting is the wire contract.
pub fn render_project_checklist(
    title: &str,
    required: &[Feature],
    bonus: &[Feature],
    statuses: Option<&StatusMap>,
) -> String {
    let ordered = order_features(required, statuses);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {} \u{2014} Checklist", title));
    lines.push(String::new());
    lines.push("## Implementation Order".to_string());
    lines.push(String::new());
    for (i, feature) in ordered.iter().enumerate() {
        lines.push(format!("{}. {} ({})", i + 1, feature.title, feature.difficulty));
    }

    lines.push(String::new());
    lines.push("## Tasks".to_string());
    lines.push(String::new());
    for feature in &ordered {
        push_feature_item(&mut lines, feature, statuses);
    }

    if !bonus.is_empty() {
        lines.push(String::new());
        lines.push("## Bonus".to_string());
        lines.push(String::new());
        for feature in bonus {
            push_feature_item(&mut lines, feature, statuses);
        }
    }

    finalize(lines)
}

/// Render a per-level checklist from the roadmap: one checkbox per project
/// with sub-bullets for whichever details the roadmap provides.
pub fn render_level_checklist(level: &Level) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "# Level {} \u{2014} {} \u{2014} Checklist",
        level.number, level.name
    ));
    lines.push(String::new());

    for project in &level.projects {
        lines.push(format!("- [ ] {:02}. {}", project.id, project.title));
        let details = &project.details;
        if let Some(v) = &details.what_you_build {
            lines.push(format!("  - What you'll build: {}", v));
        }
        if let Some(v) = &details.skills {
            lines.push(format!("  - Skills: {}", v));
        }
        if let Some(v) = &details.milestones {
            lines.push(format!("  - Milestones: {}", v));
        }
        if let Some(v) = &details.stretch_goals {
            lines.push(format!("  - Stretch goals: {}", v));
        }
    }

    finalize(lines)
}

/// Status for a feature: map lookup by lowercased title, todo when absent.
fn status_of(feature: &Feature, statuses: Option<&StatusMap>) -> ImplStatus {
    statuses
        .and_then(|map| map.get(&feature.title.to_lowercase()).copied())
        .unwrap_or_default()
}

fn order_features<'a>(features: &'a [Feature], statuses: Option<&StatusMap>) -> Vec<&'a Feature> {
    let mut ordered: Vec<&Feature> = features.iter().collect();
    if statuses.is_some() {
        ordered.sort_by(|a, b| {
            status_of(a, statuses)
                .cmp(&status_of(b, statuses))
                .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        });
    }
    ordered
}

fn push_feature_item(lines: &mut Vec<String>, feature: &Feature, statuses: Option<&StatusMap>) {
    let status = status_of(feature, statuses);
    lines.push(format!(
        "- {} {} ({})",
        status.marker(),
        feature.title,
        feature.difficulty
    ));
    let criterion_marker = if status == ImplStatus::Done { "[x]" } else { "[ ]" };
    for criterion in &feature.criteria {
        lines.push(format!("  - {} {}", criterion_marker, criterion));
    }
}

/// Trim trailing whitespace per line and end with exactly one newline.
fn finalize(lines: Vec<String>) -> String {
    let mut out = lines
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}
