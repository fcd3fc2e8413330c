mod common;
use common::*;
use pcp::mach::{Event, Runtime};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_list_sorted() {
    let mut r = runtime_with(&["30 END", "10 print  \"A\"", "20 GOTO 30", "LIST"]);
    assert_eq!(exec(&mut r), "10 print  \"A\"\n20 GOTO 30\n30 END\n");
}

#[test]
fn test_overwrite_line() {
    let mut r = runtime_with(&["10 PRINT A", "10 PRINT B", "list"]);
    assert_eq!(exec(&mut r), "10 PRINT B\n");
}

#[test]
fn test_list_empty() {
    let mut r = runtime_with(&["LIST"]);
    assert_eq!(exec(&mut r), "No BASIC program loaded.\n");
}

#[test]
fn test_new() {
    let mut r = runtime_with(&["10 PRINT A", "NEW"]);
    assert_eq!(exec(&mut r), "BASIC program cleared.\n");
    assert!(r.program().is_empty());
    r.enter("RUN");
    assert_eq!(exec(&mut r), "No BASIC program loaded.\n");
}

#[test]
fn test_invalid_line() {
    let mut r = runtime_with(&["PRINT A", "10", "RUN FAST", "SAVE"]);
    let message = "Invalid BASIC line. Must start with line number and code.\n";
    assert_eq!(exec(&mut r), message.repeat(4));
    assert!(r.program().is_empty());
}

#[test]
fn test_tab_after_line_number_rejected() {
    let mut r = runtime_with(&["10\tPRINT X"]);
    assert_eq!(
        exec(&mut r),
        "Invalid BASIC line. Must start with line number and code.\n"
    );
    assert!(r.program().is_empty());
}

#[test]
fn test_blank_input_ignored() {
    let mut r = Runtime::default();
    assert!(!r.enter("   "));
    assert!(r.enter("10 END"));
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_exit() {
    let mut r = runtime_with(&["exit"]);
    assert_eq!(r.execute(10), Event::Exit);
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.bas");
    let path = path.to_str().unwrap();
    let mut r = runtime_with(&[r#"20 PRINT "WORLD""#, r#"10 PRINT "HELLO ";"#]);
    r.enter(&format!("SAVE {}", path));
    assert_eq!(exec(&mut r), format!("BASIC program saved to '{}'\n", path));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "10 PRINT \"HELLO \";\n20 PRINT \"WORLD\"\n"
    );

    let mut other = runtime_with(&["99 PRINT OLD"]);
    other.enter(&format!("load {}", path));
    assert_eq!(exec(&mut other), format!("BASIC program loaded from '{}'\n", path));
    assert_eq!(other.program(), r.program());
    other.enter("RUN");
    assert_eq!(exec(&mut other), "HELLO WORLD\n");
}

#[test]
fn test_load_missing_keeps_program() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.bas");
    let path = path.to_str().unwrap();
    let mut r = runtime_with(&["10 PRINT KEPT"]);
    r.enter(&format!("LOAD {}", path));
    assert_eq!(exec(&mut r), format!("File '{}' not found.\n", path));
    r.enter("RUN");
    assert_eq!(exec(&mut r), "KEPT\n\n");
}

#[test]
fn test_load_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.bas");
    fs::write(&path, "# comment\n10 PRINT A\nTEN PRINT B\n20 END\n").unwrap();
    let mut r = Runtime::default();
    r.enter(&format!("LOAD {}", path.display()));
    exec(&mut r);
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10 PRINT A\n20 END\n");
}

#[test]
fn test_save_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such.bas");
    let mut r = runtime_with(&["10 END"]);
    r.enter(&format!("SAVE {}", path.display()));
    assert!(exec(&mut r).starts_with("Error saving BASIC program: "));
}
