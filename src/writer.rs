//! Streams the summary document to disk.
//!
//! The structure section is serialized in one piece (its shape requires the
//! complete tree); file sections are written one at a time, raw bytes
//! verbatim. Creating the writer truncates any prior output at the same path.

use crate::error::SummaryError;
use crate::types::StructureMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub(crate) struct SummaryWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl SummaryWriter {
    pub(crate) fn create(path: &Path) -> Result<Self, SummaryError> {
        let file = File::create(path).map_err(|e| SummaryError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        })
    }

    pub(crate) fn write_structure(&mut self, structure: &StructureMap) -> Result<(), SummaryError> {
        let json = serde_json::to_string_pretty(structure)?;
        write!(self.out, "## Project Structure\n```json\n{}\n```\n\n", json)
            .map_err(|e| SummaryError::io(&self.path, e))
    }

    pub(crate) fn begin_file_contents(&mut self) -> Result<(), SummaryError> {
        write!(self.out, "## File Contents\n\n").map_err(|e| SummaryError::io(&self.path, e))
    }

    /// Emits one file section: a heading with the relative path, then the
    /// content bytes unchanged inside a fence.
    pub(crate) fn write_file(&mut self, rel: &str, content: &[u8]) -> Result<(), SummaryError> {
        write!(self.out, "### {}\n```\n", rel).map_err(|e| SummaryError::io(&self.path, e))?;
        self.out
            .write_all(content)
            .map_err(|e| SummaryError::io(&self.path, e))?;
        write!(self.out, "\n```\n").map_err(|e| SummaryError::io(&self.path, e))
    }

    pub(crate) fn finish(mut self) -> Result<(), SummaryError> {
        self.out.flush().map_err(|e| SummaryError::io(&self.path, e))
    }
}
