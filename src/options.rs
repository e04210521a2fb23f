use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte within the sampled prefix marks the file as binary.
    Simple,
    /// Heuristic classification of the sampled prefix via `content_inspector`.
    Accurate,
    /// Treat every file as text.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    All,
    /// Newline-delimited relative paths; only the listed files are included.
    FileList(PathBuf),
    /// Newline-delimited regex patterns; a file is included if any matches.
    RegexList(PathBuf),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Resolve `output` against `root` rather than the working directory.
    pub output_at_root: bool,
    pub capture_structure: bool,
    pub selection: SelectionMode,
    pub ignore_globs: Vec<String>,
    pub binary_detection: BinaryDetection,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("output.txt"),
            output_at_root: true,
            capture_structure: true,
            selection: SelectionMode::All,
            ignore_globs: Vec::new(),
            binary_detection: BinaryDetection::Simple,
        }
    }
}

#[derive(Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}

impl SummaryBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SummaryOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn output_at_root(mut self, yes: bool) -> Self {
        self.options.output_at_root = yes;
        self
    }
    pub fn capture_structure(mut self, yes: bool) -> Self {
        self.options.capture_structure = yes;
        self
    }
    pub fn selection(mut self, mode: SelectionMode) -> Self {
        self.options.selection = mode;
        self
    }
    pub fn ignore_globs(mut self, globs: Vec<String>) -> Self {
        self.options.ignore_globs = globs;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}
