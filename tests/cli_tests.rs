//! Command-line tests against the built `jtir` binary

use std::process::{Command, Output};

fn jtir(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jtir"))
        .args(args)
        .env_remove("JTIR_COMPLEXITY_LIMIT")
        .env_remove("JTIR_MAX_DEPTH")
        .env_remove("JTIR_ITERATION_LIMIT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute jtir")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn report_prints_totals() {
    let output = jtir(&["report", "--iterations", "10"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("total complexity: 234"));
    assert!(text.contains("depth: 3"));
    assert!(text.contains("within budget: true (limit 10000000, max depth 3)"));
    assert!(text.lines().any(|line| line.starts_with("Test::int run()") && line.ends_with(" 230")));
}

#[test]
fn print_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.java");
    let output = jtir(&["print", "--flatten", "--iterations", "10", "--output", file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let source = std::fs::read_to_string(&file).unwrap();
    assert!(source.ends_with("    }\n"));
    assert!(source.contains("for (; (i < 10); ) {"));
    assert!(!source.contains("while ((j > 0))"));
}

#[test]
fn print_to_stdout() {
    let output = jtir(&["print"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("for (; (i < 1000); ) {"));
}

#[test]
fn environment_overrides_budget() {
    let output = Command::new(env!("CARGO_BIN_EXE_jtir"))
        .args(["report"])
        .env("JTIR_ITERATION_LIMIT", "2")
        .env("JTIR_COMPLEXITY_LIMIT", "50")
        .env_remove("JTIR_MAX_DEPTH")
        .output()
        .expect("failed to execute jtir");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("total complexity: 114"));
    assert!(text.contains("within budget: false (limit 50, max depth 3)"));
}

#[test]
fn zero_iterations_are_rejected() {
    let output = jtir(&["report", "--iterations", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("iteration limit must be positive"));
}
