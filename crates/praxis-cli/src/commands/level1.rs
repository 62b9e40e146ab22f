//! Per-project checklist generator for level 1.
//!
//! Same as the levels 2-5 generator, with one addition: for project 01 (the
//! command-line calculator) the companion `main.py` is scanned for expected
//! code shapes and the checklist is ordered and marked by the inferred
//! done/partial/todo status. The scan is a documented one-off scoped to that
//! single project.

use clap::Parser;
use praxis_spec::{names, render_project_checklist, SpecDocParser, StatusMap, StatusScanner};
use tracing::{debug, info, warn};

use super::{read_input, title_from_dir, write_output};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, RunSummary};

#[derive(Debug, Parser)]
pub struct Level1ChecklistsCommand {}

impl Level1ChecklistsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let parser = SpecDocParser::new();
        let statuses = self.scan_calculator(ctx)?;
        let mut summary = RunSummary::new("level1-checklists");

        for dir in ctx.layout.project_dirs(1)? {
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

            let status = if praxis_spec::is_first_project(&dir) {
                statuses.as_ref()
            } else {
                None
            };

            let title = doc.title.clone().unwrap_or_else(|| title_from_dir(&dir));
            let checklist = render_project_checklist(&title, &doc.required, &doc.bonus, status);
            let checklist_path = dir.join(names::CHECKLIST_FILE);
            write_output(&checklist_path, &checklist)?;
            summary.record(checklist_path.display().to_string());
        }

        if summary.count() == 0 {
            summary.set_note("nothing to do: no project specs found under level 1");
        }
        print_output(ctx, &summary)
    }

    /// Scan the calculator source if it exists; without it every feature
    /// simply renders as todo.
    fn scan_calculator(&self, ctx: &CommandContext) -> Result<Option<StatusMap>, CliError> {
        let Some(source_path) = ctx.layout.find_calculator_source()? else {
            debug!("no calculator source found, statuses default to todo");
            return Ok(None);
        };

        let source = read_input(&source_path)?;
        let statuses = StatusScanner::new().scan(&source);
        info!(
            "inferred {} feature status(es) from {}",
            statuses.len(),
            source_path.display()
        );
        Ok(Some(statuses))
    }
}
