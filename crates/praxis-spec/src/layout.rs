use std::fs;
use std::path::{Path, PathBuf};

/// Fixed file and directory names of the curriculum tree.
pub mod names {
    pub const ROADMAP: &str = "ROADMAP.md";
    pub const LEVELS_DIR: &str = "levels";
    pub const LEVEL_PREFIX: &str = "level-";
    pub const SPEC_FILE: &str = "SPEC.md";
    pub const CHECKLIST_FILE: &str = "CHECKLIST.md";
    pub const MASTER_SPECS: &str = "SPECS.md";
    /// Companion source of the level 1 calculator project, heuristic-scan
    /// input only.
    pub const CALCULATOR_SOURCE_GLOB: &str = "01-*/main.py";
}

/// Path conventions of a curriculum repository, anchored at an injected root.
///
/// The root is the single process-wide configuration value; every input and
/// output path is a fixed location relative to it.
#[derive(Debug, Clone)]
pub struct CurriculumLayout {
    root: PathBuf,
}

impl CurriculumLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/ROADMAP.md`
    pub fn roadmap_path(&self) -> PathBuf {
        self.root.join(names::ROADMAP)
    }

    /// `<root>/levels/level-<n>`
    pub fn level_dir(&self, number: u32) -> PathBuf {
        self.root
            .join(names::LEVELS_DIR)
            .join(format!("{}{}", names::LEVEL_PREFIX, number))
    }

    /// `<root>/levels/level-<n>/CHECKLIST.md`
    pub fn level_checklist(&self, number: u32) -> PathBuf {
        self.level_dir(number).join(names::CHECKLIST_FILE)
    }

    /// `<root>/levels/level-<n>/SPECS.md` (master document for the splitter)
    pub fn master_specs(&self, number: u32) -> PathBuf {
        self.level_dir(number).join(names::MASTER_SPECS)
    }

    /// Project folders under a level, sorted by name. Folders must start
    /// with a two-digit id and a hyphen; anything else is ignored. A missing
    /// level directory yields an empty list; nothing to do is not an error.
    pub fn project_dirs(&self, number: u32) -> Result<Vec<PathBuf>, LayoutError> {
        let dir = self.level_dir(number);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() && is_project_folder_name(&entry.file_name().to_string_lossy()) {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    /// First match of the calculator-source glob under level 1, if any.
    pub fn find_calculator_source(&self) -> Result<Option<PathBuf>, LayoutError> {
        let pattern = self
            .level_dir(1)
            .join(names::CALCULATOR_SOURCE_GLOB)
            .to_string_lossy()
            .into_owned();

        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => return Ok(Some(path)),
                Err(e) => {
                    tracing::debug!("skipping unreadable glob entry: {}", e);
                }
            }
        }
        Ok(None)
    }
}

/// True for `NN-slug` style folder names.
pub fn is_project_folder_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), Some('-')) if a.is_ascii_digit() && b.is_ascii_digit()
    )
}

/// True when the folder belongs to project 01 of its level.
pub fn is_first_project(dir: &Path) -> bool {
    dir.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("01-"))
}

/// Errors for layout operations
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fixed_paths() {
        let layout = CurriculumLayout::new("/repo");
        assert_eq!(layout.roadmap_path(), PathBuf::from("/repo/ROADMAP.md"));
        assert_eq!(layout.level_dir(3), PathBuf::from("/repo/levels/level-3"));
        assert_eq!(
            layout.level_checklist(1),
            PathBuf::from("/repo/levels/level-1/CHECKLIST.md")
        );
        assert_eq!(
            layout.master_specs(5),
            PathBuf::from("/repo/levels/level-5/SPECS.md")
        );
    }

    #[test]
    fn test_project_folder_names() {
        assert!(is_project_folder_name("01-calculator"));
        assert!(is_project_folder_name("12-http-server"));
        assert!(!is_project_folder_name("calculator"));
        assert!(!is_project_folder_name("1-calculator"));
        assert!(!is_project_folder_name("templates"));
    }

    #[test]
    fn test_project_dirs_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let layout = CurriculumLayout::new(temp.path());
        let level = layout.level_dir(2);
        fs::create_dir_all(level.join("02-word-counter")).unwrap();
        fs::create_dir_all(level.join("01-log-parser")).unwrap();
        fs::create_dir_all(level.join("notes")).unwrap();
        fs::write(level.join("CHECKLIST.md"), "x").unwrap();

        let dirs = layout.project_dirs(2).unwrap();
        let dir_names: Vec<String> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(dir_names, vec!["01-log-parser", "02-word-counter"]);
    }

    #[test]
    fn test_missing_level_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let layout = CurriculumLayout::new(temp.path());
        assert!(layout.project_dirs(4).unwrap().is_empty());
    }

    #[test]
    fn test_find_calculator_source() {
        let temp = TempDir::new().unwrap();
        let layout = CurriculumLayout::new(temp.path());
        assert!(layout.find_calculator_source().unwrap().is_none());

        let project = layout.level_dir(1).join("01-command-line-calculator");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("main.py"), "print('hi')\n").unwrap();

        let found = layout.find_calculator_source().unwrap().unwrap();
        assert!(found.ends_with("01-command-line-calculator/main.py"));
    }
}
