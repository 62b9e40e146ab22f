//! Roadmap checklist generator.
//!
//! Parses `ROADMAP.md` into levels and projects, writes a `CHECKLIST.md`
//! into each level folder, and rewrites the roadmap in place with a summary
//! block under each level heading. A roadmap with no level headings aborts
//! the run: this generator requires at least one parsed level to proceed.

use clap::Parser;
use praxis_spec::{render_level_checklist, RoadmapParser};
use tracing::info;

use super::{ensure_dir, read_input, write_output};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, RunSummary};

#[derive(Debug, Parser)]
pub struct RoadmapCommand {}

impl RoadmapCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let roadmap_path = ctx.layout.roadmap_path();
        let content = read_input(&roadmap_path)?;

        let parser = RoadmapParser::new();
        let levels = parser.parse(&content);
        if levels.is_empty() {
            return Err(CliError::Validation(format!(
                "no level headings found in {}",
                roadmap_path.display()
            )));
        }
        info!("parsed {} level(s) from {}", levels.len(), roadmap_path.display());

        let mut summary = RunSummary::new("roadmap");

        for level in &levels {
            ensure_dir(&ctx.layout.level_dir(level.number))?;
            let checklist_path = ctx.layout.level_checklist(level.number);
            write_output(&checklist_path, &render_level_checklist(level))?;
            summary.record(checklist_path.display().to_string());
        }

        let rewritten = parser.insert_summaries(&content, &levels);
        write_output(&roadmap_path, &rewritten)?;
        summary.record(roadmap_path.display().to_string());

        print_output(ctx, &summary)
    }
}
