use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The immediate children of one directory, in visit order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DirectoryStructure {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// The structure section: relative directory path (root is `""`) mapped to its
/// immediate children.
pub type StructureMap = BTreeMap<String, DirectoryStructure>;

/// A filesystem node seen during the walk.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// The full path to the entry.
    pub path: PathBuf,
    /// The path relative to the configured root, with forward slashes.
    pub rel: String,
    pub is_dir: bool,
}

/// Why a path was left out of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Matched the built-in deny-list, an ignore file, or an extra glob.
    Ignored,
    /// Classified as binary (or unreadable, which classifies as binary).
    Binary,
    /// Content read failed after the file passed binary detection.
    Unreadable(String),
    /// An explicitly listed file that does not exist under the root.
    Missing,
}

/// One per-path diagnostic recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: String,
    pub reason: SkipReason,
}

/// The outcome of a summary run.
#[derive(Debug)]
pub struct SummaryReport {
    /// Where the summary document was written.
    pub output: PathBuf,
    pub files_written: usize,
    /// Every skip decision, in the order it was made.
    pub skipped: Vec<Skipped>,
}
