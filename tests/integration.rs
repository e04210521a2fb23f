use flatsum::{SelectionMode, SkipReason, StructureMap, SummaryBuilder, generate_summary};
use std::fs;
use tempfile::tempdir;

fn structure_block(output: &str) -> StructureMap {
    let json = output
        .split("```json\n")
        .nth(1)
        .expect("structure section missing")
        .split("\n```")
        .next()
        .unwrap();
    serde_json::from_str(json).expect("structure section is not valid JSON")
}

#[test]
fn all_mode_honors_gitignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("secret.txt"), "classified").unwrap();
    fs::write(dir.path().join(".gitignore"), "secret.txt\n").unwrap();
    let options = SummaryBuilder::new(dir.path()).build();
    let report = generate_summary(options).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(output.contains("### a.txt\n```\nhello\n```\n"));
    assert!(!output.contains("secret.txt"));
    assert_eq!(report.files_written, 1);
}

#[test]
fn regex_mode_selects_matching_paths() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("docs/readme.md"), "# readme").unwrap();
    fs::write(dir.path().join("include.txt"), "^src/.*\\.rs$\n").unwrap();
    let options = SummaryBuilder::new(dir.path())
        .selection(SelectionMode::RegexList("include.txt".into()))
        .capture_structure(false)
        .build();
    let report = generate_summary(options).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(output.contains("### src/main.rs"));
    assert!(!output.contains("readme.md"));
    assert_eq!(report.files_written, 1);
}

#[test]
fn file_list_mode_warns_on_missing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    fs::write(dir.path().join("list.txt"), "a.txt\nmissing.txt\n").unwrap();
    let options = SummaryBuilder::new(dir.path())
        .selection(SelectionMode::FileList("list.txt".into()))
        .capture_structure(false)
        .build();
    let report = generate_summary(options).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(output.contains("### a.txt\n```\nalpha\n```\n"));
    assert_eq!(report.files_written, 1);
    assert!(report
        .skipped
        .iter()
        .any(|s| s.path == "missing.txt" && s.reason == SkipReason::Missing));
}

#[test]
fn runs_are_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn lib() {}").unwrap();
    fs::write(dir.path().join("readme.md"), "# project").unwrap();
    let first = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let first_bytes = fs::read(&first.output).unwrap();
    let second = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let second_bytes = fs::read(&second.output).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn ignored_directory_contributes_nothing() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("private/sub")).unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("private/inner.txt"), "hidden").unwrap();
    fs::write(dir.path().join("private/sub/deep.txt"), "deeper").unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn lib() {}").unwrap();
    fs::write(dir.path().join(".gitignore"), "private/\n").unwrap();
    let report = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(!output.contains("private"));
    assert!(!output.contains("inner"));
    assert!(!output.contains("deeper"));
    let structure = structure_block(&output);
    assert!(structure.contains_key(""));
    assert!(structure.contains_key("src"));
    assert!(!structure.contains_key("private"));
    assert_eq!(structure.get("").unwrap().directories, vec!["src"]);
    assert!(structure.get("").unwrap().files.is_empty());
}

#[test]
fn structure_lists_immediate_children_only() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/util")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("src/util/helper.rs"), "pub fn help() {}").unwrap();
    let report = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    let structure = structure_block(&output);
    assert_eq!(structure.get("src").unwrap().directories, vec!["util"]);
    assert_eq!(structure.get("src").unwrap().files, vec!["main.rs"]);
    assert_eq!(structure.get("src/util").unwrap().files, vec!["helper.rs"]);
}

#[test]
fn empty_directory_still_gets_a_structure_entry() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    let report = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    let structure = structure_block(&output);
    assert_eq!(structure.get("").unwrap().directories, vec!["empty"]);
    assert!(structure.get("empty").unwrap().files.is_empty());
    assert!(structure.get("empty").unwrap().directories.is_empty());
}

#[test]
fn structure_section_can_be_disabled() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let options = SummaryBuilder::new(dir.path())
        .capture_structure(false)
        .build();
    let report = generate_summary(options).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(!output.contains("## Project Structure"));
    assert!(output.starts_with("## File Contents\n\n"));
}

#[test]
fn binary_files_are_listed_but_not_emitted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bin.dat"), [0u8, 1, 2]).unwrap();
    fs::write(dir.path().join("text.txt"), "ok").unwrap();
    let report = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(!output.contains("### bin.dat"));
    assert!(output.contains("### text.txt"));
    let structure = structure_block(&output);
    assert!(structure.get("").unwrap().files.contains(&"bin.dat".to_string()));
    assert!(report
        .skipped
        .iter()
        .any(|s| s.path == "bin.dat" && s.reason == SkipReason::Binary));
}

#[test]
fn output_can_be_placed_outside_the_root() {
    let root = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    fs::write(root.path().join("a.txt"), "hello").unwrap();
    let output = elsewhere.path().join("snapshot.txt");
    let options = SummaryBuilder::new(root.path())
        .output(&output)
        .output_at_root(false)
        .build();
    let report = generate_summary(options).unwrap();
    assert_eq!(report.output, output);
    assert!(fs::read_to_string(&output).unwrap().contains("### a.txt"));
}

#[test]
fn previous_output_is_overwritten() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "first").unwrap();
    generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    fs::write(dir.path().join("a.txt"), "second").unwrap();
    let report = generate_summary(SummaryBuilder::new(dir.path()).build()).unwrap();
    let output = fs::read_to_string(&report.output).unwrap();
    assert!(output.contains("second"));
    assert!(!output.contains("first"));
}

#[test]
fn non_utf8_bytes_pass_through_verbatim() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("weird.txt"), [0xE9, b'x']).unwrap();
    let options = SummaryBuilder::new(dir.path())
        .capture_structure(false)
        .build();
    let report = generate_summary(options).unwrap();
    let bytes = fs::read(&report.output).unwrap();
    assert!(bytes.windows(2).any(|w| w == [0xE9, b'x']));
}

#[test]
fn root_must_be_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "not a dir").unwrap();
    assert!(generate_summary(SummaryBuilder::new(&file).build()).is_err());
}
