//! Runs the `notion-adapter` binary end to end.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "integration tests")]

use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use notion_bridge::LOG_LEVEL_VAR;

const MEETING_NOTES: &str = r#"{"Title":"Call","Type":"Meeting Notes"}"#;

const MEETING_NOTES_PRETTY: &str = r#"{
  "Title": "Call",
  "Type": "Meeting Notes",
  "Icon": "",
  "Summary": [],
  "References": [],
  "Stories": [],
  "Arguments": [],
  "Sentiment": [],
  "Duration": ""
}"#;

fn adapter() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_notion-adapter"));
    command.env_remove(LOG_LEVEL_VAR);
    command
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = adapter()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn notion-adapter");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn write_input(dir: &Path, text: &str) -> String {
    let path = dir.join("input.json");
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

#[test]
fn stdin_record_is_printed_with_trailing_newline() {
    let output = run_with_stdin(&[], MEETING_NOTES);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{MEETING_NOTES_PRETTY}\n")
    );
}

#[test]
fn output_file_gets_json_and_confirmation_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), MEETING_NOTES);
    let target = dir.path().join("out.json");

    let output = adapter()
        .args([input.as_str(), "-o", &target.display().to_string()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), MEETING_NOTES_PRETTY);
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("Notion-compatible JSON saved to {}\n", target.display())
    );
}

#[test]
fn invalid_json_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "{bad");

    let output = adapter().arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input error"));
}

#[test]
fn unwritable_output_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("missing").join("out.json");

    let output = run_with_stdin(&["-o", &target.display().to_string()], MEETING_NOTES);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Output error"));
}

#[test]
fn missing_input_file_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let absent = dir.path().join("absent.json");

    let output = adapter().arg(&absent).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
}
