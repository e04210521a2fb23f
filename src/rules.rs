use crate::error::SummaryError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

pub const GITIGNORE_FILE: &str = ".gitignore";
pub const SUMMARYIGNORE_FILE: &str = ".summaryignore";

const BUILTIN_PREFIXES: &[&str] = &[
    ".git",
    ".vscode/",
    "node_modules/",
    "vendor/",
    ".idea/",
    GITIGNORE_FILE,
    SUMMARYIGNORE_FILE,
];

/// Decides which relative paths stay out of the summary.
///
/// Combines a fixed built-in prefix deny-list (plus the output file's own
/// relative path), the root `.gitignore`, the root `.summaryignore`, and any
/// extra glob patterns supplied at startup. Immutable once loaded.
pub struct IgnoreRules {
    prefixes: Vec<String>,
    git: Gitignore,
    summary: Gitignore,
    extra: Option<GlobSet>,
}

impl IgnoreRules {
    /// Loads the rule sets for a run rooted at `root`.
    ///
    /// A missing ignore file is not an error; a malformed one is.
    pub fn load(
        root: &Path,
        output_rel: Option<&str>,
        extra_globs: &[String],
    ) -> Result<Self, SummaryError> {
        let mut prefixes: Vec<String> = BUILTIN_PREFIXES.iter().map(|p| p.to_string()).collect();
        if let Some(output) = output_rel {
            prefixes.push(output.to_string());
        }
        let git = load_ignore_file(root, GITIGNORE_FILE)?;
        let summary = load_ignore_file(root, SUMMARYIGNORE_FILE)?;
        let extra = if extra_globs.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in extra_globs {
                let glob = Glob::new(pattern)
                    .map_err(|e| SummaryError::Glob(format!("'{}': {}", pattern, e)))?;
                builder.add(glob);
            }
            Some(
                builder
                    .build()
                    .map_err(|e| SummaryError::Glob(e.to_string()))?,
            )
        };
        Ok(Self {
            prefixes,
            git,
            summary,
            extra,
        })
    }

    /// True if `rel` is excluded by any rule source. Pure given the loaded sets.
    pub fn should_ignore(&self, rel: &str, is_dir: bool) -> bool {
        if self.prefixes.iter().any(|prefix| rel.starts_with(prefix.as_str())) {
            return true;
        }
        let path = Path::new(rel);
        self.git.matched(path, is_dir).is_ignore()
            || self.summary.matched(path, is_dir).is_ignore()
            || self.extra.as_ref().is_some_and(|globs| globs.is_match(path))
    }
}

fn load_ignore_file(root: &Path, name: &str) -> Result<Gitignore, SummaryError> {
    let path = root.join(name);
    if !path.exists() {
        return Ok(Gitignore::empty());
    }
    let mut builder = GitignoreBuilder::new(root);
    if let Some(source) = builder.add(&path) {
        return Err(SummaryError::IgnoreFile { path, source });
    }
    builder
        .build()
        .map_err(|source| SummaryError::IgnoreFile { path, source })
}
