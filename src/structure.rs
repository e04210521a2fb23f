//! Internal module folding walk entries into the structure section.

use crate::types::{StructureMap, WalkEntry};

/// Builds the directory → {directories, files} mapping from the walk's entry
/// list. Every visited directory gets a key (the root is `""`), even when it
/// has no surviving children; child names keep visit order.
pub(crate) fn build_structure(entries: &[WalkEntry]) -> StructureMap {
    let mut structure = StructureMap::new();
    structure.entry(String::new()).or_default();
    for entry in entries {
        let (parent, name) = match entry.rel.rsplit_once('/') {
            Some((parent, name)) => (parent.to_string(), name.to_string()),
            None => (String::new(), entry.rel.clone()),
        };
        if entry.is_dir {
            structure.entry(parent).or_default().directories.push(name);
            structure.entry(entry.rel.clone()).or_default();
        } else {
            structure.entry(parent).or_default().files.push(name);
        }
    }
    structure
}
