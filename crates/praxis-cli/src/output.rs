//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    fn format_text(&self) -> String;
    fn format_json(&self) -> Result<String, serde_json::Error>;
}

/// Print formatted output to stdout, honoring `--quiet`.
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    if ctx.quiet {
        return Ok(());
    }
    let output = match ctx.format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value
            .format_json()
            .map_err(|e| CliError::Other(anyhow::anyhow!("JSON serialization failed: {}", e)))?,
    };
    println!("{}", output);
    Ok(())
}

/// Per-run summary: which files were written, plus an optional note
/// ("nothing to do" and the like).
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub operation: String,
    pub files_written: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RunSummary {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            files_written: Vec::new(),
            note: None,
        }
    }

    pub fn record(&mut self, path: impl Into<String>) {
        self.files_written.push(path.into());
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    pub fn count(&self) -> usize {
        self.files_written.len()
    }
}

impl FormattedOutput for RunSummary {
    fn format_text(&self) -> String {
        let mut lines: Vec<String> = self
            .files_written
            .iter()
            .map(|p| format!("wrote {}", p))
            .collect();
        lines.push(format!(
            "{}: {} file(s) written",
            self.operation,
            self.files_written.len()
        ));
        if let Some(note) = &self.note {
            lines.push(note.clone());
        }
        lines.join("\n")
    }

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_summary() {
        let mut summary = RunSummary::new("roadmap");
        summary.record("levels/level-1/CHECKLIST.md");
        summary.record("ROADMAP.md");

        let text = summary.format_text();
        assert!(text.contains("wrote levels/level-1/CHECKLIST.md"));
        assert!(text.contains("roadmap: 2 file(s) written"));
    }

    #[test]
    fn test_note_appended() {
        let mut summary = RunSummary::new("split");
        summary.set_note("nothing to do: no project sections found");
        assert!(summary.format_text().ends_with("no project sections found"));
    }

    #[test]
    fn test_json_summary() {
        let mut summary = RunSummary::new("split");
        summary.record("levels/level-5/01-http-server/SPEC.md");

        let json = summary.format_json().unwrap();
        assert!(json.contains("\"operation\": \"split\""));
        assert!(json.contains("01-http-server"));
        assert!(!json.contains("note"));
    }
}
