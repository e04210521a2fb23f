//! # Flatsum
//!
//! `flatsum` flattens a project directory tree into a single summary document.
//! It walks the tree once, filters out version-control metadata, dependency
//! directories, binary files, and anything matched by `.gitignore` or
//! `.summaryignore`, then writes the survivors into one output file: an
//! optional JSON rendering of the tree's shape followed by a fenced block per
//! included file.
//!
//! Which files make it into the summary is controlled by a selection mode:
//! everything, an explicit newline-delimited file list, or a set of regular
//! expressions matched against root-relative paths.
//!
//! # Features
//!
//! - `parallel`: Reads and classifies files on a Rayon pool; write order to the
//!   output stays serialized.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use flatsum::{SummaryBuilder, SelectionMode, generate_summary};
//!
//! let options = SummaryBuilder::new(".")
//!     .selection(SelectionMode::All)
//!     .capture_structure(true)
//!     .build();
//!
//! let report = generate_summary(options).expect("Failed to generate summary");
//!
//! println!(
//!     "wrote {} files to {}",
//!     report.files_written,
//!     report.output.display()
//! );
//! for skip in report.skipped {
//!     println!("skipped {}", skip.path);
//! }
//! ```

mod detect;
mod engine;
mod error;
mod options;
mod rules;
mod select;
mod structure;
mod types;
mod writer;

pub use detect::is_binary;
pub use engine::generate_summary;
pub use error::SummaryError;
pub use options::{BinaryDetection, SelectionMode, SummaryBuilder, SummaryOptions};
pub use rules::IgnoreRules;
pub use select::Selection;
pub use types::{DirectoryStructure, SkipReason, Skipped, StructureMap, SummaryReport, WalkEntry};
