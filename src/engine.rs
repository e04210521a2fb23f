use crate::detect::is_binary;
use crate::error::SummaryError;
use crate::options::SummaryOptions;
use crate::rules::IgnoreRules;
use crate::select::Selection;
use crate::structure::build_structure;
use crate::types::{SkipReason, Skipped, SummaryReport, WalkEntry};
use crate::writer::SummaryWriter;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const READ_BATCH: usize = 64;

enum Decision {
    Descend,
    SkipEntry,
    SkipSubtree,
}

struct Walker<'a> {
    root: &'a Path,
    rules: &'a IgnoreRules,
    entries: Vec<WalkEntry>,
    skipped: Vec<Skipped>,
}

impl<'a> Walker<'a> {
    fn new(root: &'a Path, rules: &'a IgnoreRules) -> Self {
        Self {
            root,
            rules,
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn walk(mut self) -> Result<(Vec<WalkEntry>, Vec<Skipped>), SummaryError> {
        let root = self.root;
        self.visit_dir(root, "")?;
        Ok((self.entries, self.skipped))
    }

    fn visit_dir(&mut self, dir: &Path, rel: &str) -> Result<(), SummaryError> {
        let reader = fs::read_dir(dir).map_err(|e| SummaryError::io(dir, e))?;
        let mut children = reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SummaryError::io(dir, e))?;
        children.sort_by_key(|child| child.file_name());
        for child in children {
            let path = child.path();
            let file_type = child.file_type().map_err(|e| SummaryError::io(&path, e))?;
            let is_dir = file_type.is_dir();
            let name = child.file_name().to_string_lossy().into_owned();
            let child_rel = if rel.is_empty() {
                name
            } else {
                format!("{}/{}", rel, name)
            };
            match self.decide(&child_rel, is_dir) {
                Decision::Descend => {
                    self.entries.push(WalkEntry {
                        path: path.clone(),
                        rel: child_rel.clone(),
                        is_dir,
                    });
                    if is_dir {
                        self.visit_dir(&path, &child_rel)?;
                    }
                }
                Decision::SkipEntry | Decision::SkipSubtree => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("ignoring {}", child_rel);
                    self.skipped.push(Skipped {
                        path: child_rel,
                        reason: SkipReason::Ignored,
                    });
                }
            }
        }
        Ok(())
    }

    fn decide(&self, rel: &str, is_dir: bool) -> Decision {
        if self.rules.should_ignore(rel, is_dir) {
            if is_dir {
                Decision::SkipSubtree
            } else {
                Decision::SkipEntry
            }
        } else {
            Decision::Descend
        }
    }
}

struct Candidate {
    path: PathBuf,
    rel: String,
}

enum LoadKind {
    Text(Vec<u8>),
    Binary,
    Unreadable(String),
}

struct Loaded {
    rel: String,
    kind: LoadKind,
}

fn load_one(candidate: &Candidate, options: &SummaryOptions) -> Loaded {
    if is_binary(&candidate.path, options.binary_detection) {
        return Loaded {
            rel: candidate.rel.clone(),
            kind: LoadKind::Binary,
        };
    }
    match fs::read(&candidate.path) {
        Ok(bytes) => Loaded {
            rel: candidate.rel.clone(),
            kind: LoadKind::Text(bytes),
        },
        Err(e) => Loaded {
            rel: candidate.rel.clone(),
            kind: LoadKind::Unreadable(e.to_string()),
        },
    }
}

#[cfg(feature = "parallel")]
fn load_batch(batch: &[Candidate], options: &SummaryOptions) -> Vec<Loaded> {
    batch.par_iter().map(|c| load_one(c, options)).collect()
}

#[cfg(not(feature = "parallel"))]
fn load_batch(batch: &[Candidate], options: &SummaryOptions) -> Vec<Loaded> {
    batch.iter().map(|c| load_one(c, options)).collect()
}

/// Runs one summary pass: walk the tree, write the optional structure section,
/// then stream a fenced section per selected text file into the output.
pub fn generate_summary(options: SummaryOptions) -> Result<SummaryReport, SummaryError> {
    #[cfg(feature = "logging")]
    tracing::debug!("summarizing {}", options.root.display());
    let meta = fs::metadata(&options.root).map_err(|e| SummaryError::io(&options.root, e))?;
    if !meta.is_dir() {
        return Err(SummaryError::InvalidPath(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }

    let output_path = if options.output_at_root {
        options.root.join(&options.output)
    } else {
        options.output.clone()
    };
    // The output's own relative path joins the deny-list so a run never
    // swallows its previous output.
    let output_rel = output_path
        .strip_prefix(&options.root)
        .ok()
        .map(rel_string);

    let rules = IgnoreRules::load(&options.root, output_rel.as_deref(), &options.ignore_globs)?;
    let selection = Selection::load(&options.root, &options.selection)?;
    let mut writer = SummaryWriter::create(&output_path)?;

    let needs_walk = options.capture_structure || !matches!(selection, Selection::Files(_));
    let (entries, walk_skipped) = if needs_walk {
        Walker::new(&options.root, &rules).walk()?
    } else {
        (Vec::new(), Vec::new())
    };

    if options.capture_structure {
        writer.write_structure(&build_structure(&entries))?;
    }
    writer.begin_file_contents()?;

    let mut report = SummaryReport {
        output: output_path,
        files_written: 0,
        skipped: walk_skipped,
    };

    let candidates = match &selection {
        Selection::Files(listed) => listed_candidates(listed, &options.root, &rules, &mut report),
        _ => entries
            .iter()
            .filter(|entry| !entry.is_dir && selection.matches(&entry.rel))
            .map(|entry| Candidate {
                path: entry.path.clone(),
                rel: entry.rel.clone(),
            })
            .collect(),
    };

    for batch in candidates.chunks(READ_BATCH) {
        for loaded in load_batch(batch, &options) {
            match loaded.kind {
                LoadKind::Text(bytes) => {
                    writer.write_file(&loaded.rel, &bytes)?;
                    report.files_written += 1;
                }
                LoadKind::Binary => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("binary file skipped: {}", loaded.rel);
                    report.skipped.push(Skipped {
                        path: loaded.rel,
                        reason: SkipReason::Binary,
                    });
                }
                LoadKind::Unreadable(err) => {
                    report.skipped.push(Skipped {
                        path: loaded.rel,
                        reason: SkipReason::Unreadable(err),
                    });
                }
            }
        }
    }

    writer.finish()?;
    Ok(report)
}

fn listed_candidates(
    listed: &[String],
    root: &Path,
    rules: &IgnoreRules,
    report: &mut SummaryReport,
) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(listed.len());
    for rel in listed {
        if rules.should_ignore(rel, false) {
            report.skipped.push(Skipped {
                path: rel.clone(),
                reason: SkipReason::Ignored,
            });
            continue;
        }
        let path = root.join(rel);
        if !path.is_file() {
            report.skipped.push(Skipped {
                path: rel.clone(),
                reason: SkipReason::Missing,
            });
            continue;
        }
        candidates.push(Candidate {
            path,
            rel: rel.clone(),
        });
    }
    candidates
}

fn rel_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
