//! Per-project checklist generator for levels 2-5.
//!
//! Walks every project folder under levels 2-5, parses its `SPEC.md` into
//! Required/Bonus features, and writes the project's `CHECKLIST.md`. Folders
//! without a spec are skipped; finding no specs at all is a benign no-op.

use clap::Parser;
use praxis_spec::{names, render_project_checklist, SpecDocParser};
use tracing::{debug, warn};

use super::{read_input, title_from_dir, write_output};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, RunSummary};

#[derive(Debug, Parser)]
pub struct SpecChecklistsCommand {}

impl SpecChecklistsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let parser = SpecDocParser::new();
        let mut summary = RunSummary::new("spec-checklists");

        for level in 2..=5 {
            for dir in ctx.layout.project_dirs(level)? {
                let spec_path = dir.join(names::SPEC_FILE);
                if !spec_path.is_file() {
                    debug!("no spec in {}, skipping", dir.display());
                    continue;
                }

                let doc = parser.parse(&read_input(&spec_path)?);
                if doc.is_empty() {
                    warn!("no feature sections in {}, skipping", spec_path.display());
                    continue;
                }

                let title = doc.title.clone().unwrap_or_else(|| title_from_dir(&dir));
                let checklist = render_project_checklist(&title, &doc.required, &doc.bonus, None);
                let checklist_path = dir.join(names::CHECKLIST_FILE);
                write_output(&checklist_path, &checklist)?;
                summary.record(checklist_path.display().to_string());
            }
        }

        if summary.count() == 0 {
            summary.set_note("nothing to do: no project specs found under levels 2-5");
        }
        print_output(ctx, &summary)
    }
}
