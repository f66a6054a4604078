use std::fs;
use std::path::PathBuf;

use ls8_machine::{LoadError, MachineError};

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

fn run_program(name: &str) -> String {
    let mut out = Vec::<u8>::new();
    ls8::run_file(program_path(name), &mut out)
        .unwrap_or_else(|e| panic!("{name} failed: {e:#}"));
    String::from_utf8(out).unwrap()
}

/// Write `contents` to a scratch file unique to this test.
fn scratch_program(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ls8_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn print8() {
    assert_eq!(run_program("print8.ls8"), "8\n");
}

#[test]
fn mult() {
    assert_eq!(run_program("mult.ls8"), "72\n");
}

#[test]
fn stack() {
    assert_eq!(run_program("stack.ls8"), "2\n4\n1\n");
}

#[test]
fn call() {
    assert_eq!(run_program("call.ls8"), "20\n30\n36\n");
}

#[test]
fn sctest() {
    assert_eq!(run_program("sctest.ls8"), "1\n2\n3\n");
}

#[test]
fn pra() {
    assert_eq!(run_program("hi.ls8"), "Hi\n");
}

#[test]
fn repeated_runs_match() {
    assert_eq!(run_program("call.ls8"), run_program("call.ls8"));
}

#[test]
fn malformed_literal_fails_before_execution() {
    // The PRN before the bad line must not produce output.
    let path = scratch_program(
        "malformed.ls8",
        "01000111 # PRN R0\n00000000\n1000001x\n00000001\n",
    );
    let mut out = Vec::<u8>::new();
    let err = ls8::run_file(&path, &mut out).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(out.is_empty());
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::InvalidLiteral { line: 3, text }) => assert_eq!(text, "1000001x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file() {
    let mut out = Vec::<u8>::new();
    let err = ls8::run_file(program_path("does_not_exist.ls8"), &mut out).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Open { .. })
    ));
}

#[test]
fn division_by_zero_is_reported() {
    // LDI R0,1; LDI R1,0; PRN R0; DIV R0,R1; PRN R0; HLT
    let path = scratch_program(
        "div_zero.ls8",
        "10000010\n00000000\n00000001\n\
         10000010\n00000001\n00000000\n\
         01000111\n00000000\n\
         10100011\n00000000\n00000001\n\
         01000111\n00000000\n\
         00000001\n",
    );
    let mut out = Vec::<u8>::new();
    let err = ls8::run_file(&path, &mut out).unwrap_err();
    fs::remove_file(&path).ok();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    assert!(matches!(
        err.downcast_ref::<MachineError>(),
        Some(MachineError::DivisionByZero { pc: 8 })
    ));
}
