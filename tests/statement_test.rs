mod common;
use common::*;
use pcp::mach::Event;

#[test]
fn test_semicolon_then_quoted_print() {
    let mut r = runtime_with(&[r#"10 PRINT "HI";"#, r#"20 PRINT "THERE""#, "30 END", "RUN"]);
    assert_eq!(exec(&mut r), "HITHERE\n");
}

#[test]
fn test_goto_skips_line() {
    let mut r = runtime_with(&["10 GOTO 30", r#"20 PRINT "SKIPPED""#, "30 END", "RUN"]);
    assert_eq!(exec(&mut r), "\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = runtime_with(&["10 GOTO 99", "RUN"]);
    assert_eq!(exec(&mut r), "Line 99 not found.\n\n");
    assert!(!r.is_running());
}

#[test]
fn test_goto_invalid_target() {
    let mut r = runtime_with(&["10 PRINT A", "20 GOTO NOWHERE", "30 PRINT B", "RUN"]);
    assert_eq!(exec(&mut r), "A\nInvalid GOTO target.\n\n");
}

#[test]
fn test_unquoted_print() {
    let mut r = runtime_with(&["10 PRINT HELLO", "RUN"]);
    assert_eq!(exec(&mut r), "HELLO\n\n");
}

#[test]
fn test_unquoted_print_with_semicolon() {
    let mut r = runtime_with(&["10 PRINT HELLO;", "20 PRINT WORLD", "RUN"]);
    assert_eq!(exec(&mut r), "HELLO;WORLD\n\n");
}

#[test]
fn test_empty_program() {
    let mut r = runtime_with(&["RUN"]);
    assert_eq!(exec(&mut r), "No BASIC program loaded.\n");
}

#[test]
fn test_unknown_statement_is_not_fatal() {
    let mut r = runtime_with(&["10 REM HELLO", "20 print done", "RUN"]);
    assert_eq!(
        exec(&mut r),
        "Unknown BASIC command at line 10: REM HELLO\ndone\n\n"
    );
}

#[test]
fn test_falls_off_end() {
    let mut r = runtime_with(&["20 PRINT TWO", "10 PRINT ONE", "RUN"]);
    assert_eq!(exec(&mut r), "ONE\nTWO\n\n");
}

#[test]
fn test_loop_until_end() {
    let mut r = runtime_with(&[
        "10 GOTO 30",
        "20 END",
        r#"30 PRINT "A";"#,
        "40 GOTO 20",
        "RUN",
    ]);
    assert_eq!(exec(&mut r), "A\n");
}

#[test]
fn test_run_twice() {
    let mut r = runtime_with(&["10 PRINT X", "RUN"]);
    assert_eq!(exec(&mut r), "X\n\n");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "X\n\n");
}

#[test]
fn test_infinite_goto_runs_until_interrupted() {
    let mut r = runtime_with(&["10 GOTO 10", "RUN"]);
    assert_eq!(exec_n(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    assert!(r.is_running());
    assert!(r.interrupt());
    assert!(!r.is_running());
    assert_eq!(exec(&mut r), "");
    assert!(!r.interrupt());
}

#[test]
fn test_zero_cycles_still_advance() {
    let mut r = runtime_with(&["10 PRINT A", "20 END", "RUN"]);
    assert_eq!(r.execute(0), Event::Print("A\n".to_string()));
    assert_eq!(r.execute(0), Event::Print("\n".to_string()));
    assert_eq!(r.execute(0), Event::Stopped);
}

#[test]
fn test_output_before_interrupt_is_kept() {
    let mut r = runtime_with(&[r#"10 PRINT "Y";"#, "20 GOTO 10", "RUN"]);
    assert_eq!(r.execute(3), pcp::mach::Event::Print("YY".to_string()));
    r.interrupt();
    assert_eq!(r.execute(3), pcp::mach::Event::Stopped);
}
