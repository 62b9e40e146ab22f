//! Spec splitter.
//!
//! Splits a master `SPECS.md` into per-project `SPEC.md` files, creating a
//! `NN-slug/` folder per section. A master with no matching headings is a
//! benign no-op. On slug collision the later section silently overwrites the
//! earlier one; the input corpus is expected to keep titles distinct.

use clap::Parser;
use praxis_spec::{folder_name, names, MasterDialect, MasterSplitter};
use tracing::info;

use super::{ensure_dir, read_input, write_output};
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, RunSummary};

#[derive(Debug, Parser)]
pub struct SplitCommand {
    /// Master document to split
    #[arg(value_enum)]
    pub target: SplitTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SplitTarget {
    /// levels/level-1/SPECS.md (headings like `## 1. Title`)
    Level1,
    /// levels/level-5/SPECS.md (headings like `## 1) Title`)
    Level5,
}

impl SplitTarget {
    fn level(&self) -> u32 {
        match self {
            Self::Level1 => 1,
            Self::Level5 => 5,
        }
    }

    fn dialect(&self) -> MasterDialect {
        match self {
            Self::Level1 => MasterDialect::Level1,
            Self::Level5 => MasterDialect::Level5,
        }
    }
}

impl SplitCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let level = self.target.level();
        let master_path = ctx.layout.master_specs(level);
        let content = read_input(&master_path)?;

        let sections = MasterSplitter::new(self.target.dialect()).split(&content);
        let mut summary = RunSummary::new("split");

        if sections.is_empty() {
            summary.set_note(format!(
                "nothing to do: no project sections found in {}",
                master_path.display()
            ));
            return print_output(ctx, &summary);
        }
        info!("splitting {} section(s) from {}", sections.len(), master_path.display());

        let level_dir = ctx.layout.level_dir(level);
        for section in &sections {
            let project_dir = level_dir.join(folder_name(section.id, &section.title));
            ensure_dir(&project_dir)?;
            let spec_path = project_dir.join(names::SPEC_FILE);
            write_output(&spec_path, &section.content())?;
            summary.record(spec_path.display().to_string());
        }

        print_output(ctx, &summary)
    }
}
