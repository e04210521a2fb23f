//! Text-vs-binary classification by sniffing a file's leading bytes.

use crate::options::BinaryDetection;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const SAMPLE_LEN: usize = 512;

/// Classifies `path` by inspecting up to its first 512 bytes. Files shorter
/// than the sample window are inspected in full; empty files are text.
///
/// A file that cannot be opened or read is reported as binary, so one
/// unreadable entry is skipped instead of aborting the run.
pub fn is_binary(path: &Path, method: BinaryDetection) -> bool {
    if method == BinaryDetection::None {
        return false;
    }
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return true,
    };
    let mut sample = [0u8; SAMPLE_LEN];
    let mut filled = 0;
    while filled < SAMPLE_LEN {
        match file.read(&mut sample[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => return true,
        }
    }
    match method {
        BinaryDetection::Simple => sample[..filled].contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&sample[..filled]).is_binary(),
        BinaryDetection::None => false,
    }
}
