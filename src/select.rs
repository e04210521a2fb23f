use crate::error::SummaryError;
use crate::options::SelectionMode;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// The compiled form of the selection mode, fixed for the whole run.
#[derive(Debug)]
pub enum Selection {
    All,
    Files(Vec<String>),
    Patterns(Vec<Regex>),
}

impl Selection {
    /// Reads and compiles the selection source named by `mode`.
    ///
    /// Relative source paths resolve against `root`. Lines are trimmed and
    /// blank lines skipped; a regex that fails to compile is fatal.
    pub fn load(root: &Path, mode: &SelectionMode) -> Result<Self, SummaryError> {
        match mode {
            SelectionMode::All => Ok(Selection::All),
            SelectionMode::FileList(path) => {
                Ok(Selection::Files(read_lines(&resolve(root, path))?))
            }
            SelectionMode::RegexList(path) => {
                let mut patterns = Vec::new();
                for line in read_lines(&resolve(root, path))? {
                    let regex = Regex::new(&line).map_err(|source| SummaryError::Pattern {
                        pattern: line.clone(),
                        source,
                    })?;
                    patterns.push(regex);
                }
                Ok(Selection::Patterns(patterns))
            }
        }
    }

    /// Whether a walked file is in scope. List mode is driven by the list
    /// itself rather than the walk, so it accepts everything here.
    pub fn matches(&self, rel: &str) -> bool {
        match self {
            Selection::All | Selection::Files(_) => true,
            Selection::Patterns(patterns) => patterns.iter().any(|p| p.is_match(rel)),
        }
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, SummaryError> {
    let text = fs::read_to_string(path).map_err(|e| SummaryError::io(path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
