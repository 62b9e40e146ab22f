//! CLI error handling.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ValidationError = 2,
    IoError = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// CLI error type mapped onto process exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required input file is absent; the run aborts with nothing written.
    #[error("missing input file: {path}")]
    MissingInput { path: PathBuf },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    /// The parser ran but the result is unusable (e.g. a roadmap with no
    /// level headings).
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Exit status category for this error.
    pub fn exit(&self) -> Exit {
        match self {
            Self::MissingInput { .. } | Self::Io { .. } => Exit::IoError,
            Self::Validation(_) => Exit::ValidationError,
            Self::Other(_) => Exit::GeneralError,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }
}

impl From<praxis_spec::LayoutError> for CliError {
    fn from(e: praxis_spec::LayoutError) -> Self {
        match e {
            praxis_spec::LayoutError::Io(source) => Self::Io {
                message: format!("filesystem error: {source}"),
                source,
                path: None,
            },
            other => Self::Other(anyhow::anyhow!(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = CliError::MissingInput {
            path: PathBuf::from("ROADMAP.md"),
        };
        assert_eq!(missing.exit(), Exit::IoError);
        assert_eq!(missing.exit() as u8, 3);

        let validation = CliError::Validation("no levels".to_string());
        assert_eq!(validation.exit(), Exit::ValidationError);
        assert_eq!(validation.exit() as u8, 2);

        let other = CliError::Other(anyhow::anyhow!("boom"));
        assert_eq!(other.exit(), Exit::GeneralError);
        assert_eq!(other.exit() as u8, 1);
    }
}
