//! Command-line interface for flatsum.
//!
//! Walks a project tree and writes a single flattened summary document,
//! printing a diagnostic line for every skipped path.

use clap::Parser;
use flatsum::{
    BinaryDetection, SelectionMode, SkipReason, SummaryBuilder, SummaryOptions, SummaryReport,
    generate_summary,
};
use std::path::PathBuf;
use std::process::exit;

/// flatsum — flatten a project tree into one summary file
#[derive(Parser)]
#[command(name = "flatsum", version, about, long_about = None)]
struct Cli {
    /// Root directory to summarize (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File of newline-delimited relative paths to include
    #[arg(long, value_name = "FILE", conflicts_with = "patterns")]
    files: Option<PathBuf>,

    /// File of newline-delimited regex patterns to include
    #[arg(long, value_name = "FILE")]
    patterns: Option<PathBuf>,

    /// Output file, resolved against the root unless --output-in-cwd
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Resolve the output path against the working directory instead
    #[arg(long)]
    output_in_cwd: bool,

    /// Skip the directory-structure section
    #[arg(long)]
    no_structure: bool,

    /// Extra ignore globs (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_globs: Vec<String>,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> SummaryOptions {
        let selection = if let Some(list) = self.files {
            SelectionMode::FileList(list)
        } else if let Some(patterns) = self.patterns {
            SelectionMode::RegexList(patterns)
        } else {
            SelectionMode::All
        };
        SummaryBuilder::new(self.root)
            .output(self.output)
            .output_at_root(!self.output_in_cwd)
            .capture_structure(!self.no_structure)
            .selection(selection)
            .ignore_globs(self.ignore_globs)
            .binary_detection(self.binary_detection)
            .build()
    }
}

fn main() {
    let cli = Cli::parse();
    let options = cli.into_options();
    match generate_summary(options) {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &SummaryReport) {
    for skip in &report.skipped {
        match &skip.reason {
            SkipReason::Ignored => println!("Ignoring {}", skip.path),
            SkipReason::Binary => println!("Ignoring binary file {}", skip.path),
            SkipReason::Missing => println!("Warning: listed file {} not found", skip.path),
            SkipReason::Unreadable(err) => {
                println!("Warning: could not read {}: {}", skip.path, err)
            }
        }
    }
    println!(
        "Summary written to {} ({} files)",
        report.output.display(),
        report.files_written
    );
}
