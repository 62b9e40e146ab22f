//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use praxis_spec::CurriculumLayout;

use crate::commands::{
    Level1ChecklistsCommand, RoadmapCommand, SpecChecklistsCommand, SplitCommand,
};
use crate::error::CliError;

/// Praxis - curriculum roadmap and checklist generators
///
/// Parses the curriculum's Markdown roadmap and spec documents and
/// regenerates the derived checklist files.
#[derive(Debug, Parser)]
#[command(
    name = "praxis",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Curriculum repository root
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help = "Curriculum repository root"
    )]
    pub root: PathBuf,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate per-level checklists from the roadmap and refresh its
    /// summary blocks
    Roadmap(RoadmapCommand),

    /// Regenerate per-project checklists from SPEC.md files under levels 2-5
    SpecChecklists(SpecChecklistsCommand),

    /// Regenerate level 1 per-project checklists, inferring implementation
    /// status for the calculator project
    Level1Checklists(Level1ChecklistsCommand),

    /// Split a master spec document into per-project SPEC.md files
    Split(SplitCommand),
}

/// Shared state passed to every command.
pub struct CommandContext {
    pub layout: CurriculumLayout,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext {
            layout: CurriculumLayout::new(self.root),
            format: self.format,
            quiet: self.quiet,
        };

        match self.command {
            Command::Roadmap(cmd) => cmd.execute(&ctx),
            Command::SpecChecklists(cmd) => cmd.execute(&ctx),
            Command::Level1Checklists(cmd) => cmd.execute(&ctx),
            Command::Split(cmd) => cmd.execute(&ctx),
        }
    }
}
