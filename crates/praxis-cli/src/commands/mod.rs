//! Command implementations.

use std::fs;
use std::io;
use std::path::Path;

mod level1;
mod roadmap;
mod spec_checklists;
mod split;

pub use level1::Level1ChecklistsCommand;
pub use roadmap::RoadmapCommand;
pub use spec_checklists::SpecChecklistsCommand;
pub use split::SplitCommand;

use crate::error::CliError;

/// Read a required input file. A missing file is a distinct error so it can
/// carry its own exit code.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CliError::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            CliError::Io {
                message: format!("failed to read {}", path.display()),
                source: e,
                path: Some(path.to_path_buf()),
            }
        }
    })
}

/// Whole-file replace write; the parent directory must already exist.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::Io {
        message: format!("failed to write {}", path.display()),
        source: e,
        path: Some(path.to_path_buf()),
    })
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), CliError> {
    fs::create_dir_all(path).map_err(|e| CliError::Io {
        message: format!("failed to create {}", path.display()),
        source: e,
        path: Some(path.to_path_buf()),
    })
}

/// Fallback title for specs without an H1: the folder name minus its numeric
/// prefix, hyphens spaced out.
pub(crate) fn title_from_dir(dir: &Path) -> String {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.splitn(2, '-').nth(1).unwrap_or(&name);
    stem.replace('-', " ")
}
