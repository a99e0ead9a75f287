use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recurcalc")).args(args)
                                                 .env_remove("RUST_LOG")
                                                 .output()
                                                 .unwrap_or_else(|e| panic!("failed to run recurcalc: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn success_prints_result() {
    let output = run(&["2 + 3 * 4"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Result: 14.0\n");
}

#[test]
fn degree_mode_flag() {
    let output = run(&["--angle-unit", "degree", "sin(90)"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Result: 1.0\n");

    let output = run(&["-a", "radian", "cos(0)"]);
    assert_eq!(stdout(&output), "Result: 1.0\n");
}

#[test]
fn evaluation_failure_exits_with_one() {
    let output = run(&["1/0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error during evaluation: Division by zero."));
}

#[test]
fn parser_failure_exits_with_one() {
    let output = run(&["2+3@5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Parser error: Unexpected character '@' at position 3."));
}

#[test]
fn malformed_invocation_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));

    let output = run(&["1+1", "2+2"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["--angle-unit", "gradian", "1"]);
    assert_eq!(output.status.code(), Some(2));
}
