use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strandjump"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_reference_line_fails() {
    let output = run_with_stdin(&[], "ACGT\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("ERROR:"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("reference"));
}

#[test]
fn test_empty_query_prints_empty_list() {
    let output = run_with_stdin(&[], "\nACGT\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "[]\n");
}

#[test]
fn test_exact_match_prints_segment() {
    let output = run_with_stdin(
        &[],
        "ACGTTGCAAGGCTTACGATC\nNNNNNNNNNNACGTTGCAAGGCTTACGATCNNNNNNNNNN\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "[(0,20,10,30)]\n");
}

#[test]
fn test_json_output_and_verbose_logging() {
    let output = run_with_stdin(
        &["-vvv", "-O", "json"],
        "ACGTTGCAAGGCTTACGATC\nNNNNNNNNNNACGTTGCAAGGCTTACGATCNNNNNNNNNN\n",
    );

    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 1);
    assert_eq!(value["segments"][0]["ref_start"], 10);
    assert!(!output.stderr.is_empty());
}
