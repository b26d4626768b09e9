//! End-to-end tests running the `tweak` binary in scratch directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const STYLESHEET: &str = "\
.timeline-border-container {
    padding: 10px 100px;
    border-radius: 8px;
}

.nav-arrow {
    font-size: 24px;
    color: #333;
}
";

fn tweak(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tweak"))
        .args(args)
        .current_dir(dir)
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tweak")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("timeline-dev.css"), STYLESHEET).unwrap();
    dir
}

#[test]
fn test_fix_rewrites_default_stylesheet() {
    let dir = project();
    let output = tweak(dir.path(), &["fix", "make", "the", "border", "thinner"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Changed to: 5px 50px"));

    let css = fs::read_to_string(dir.path().join("timeline-dev.css")).unwrap();
    assert!(css.contains("padding: 5px 50px;"));
    assert!(css.contains("border-radius: 8px;"));
}

#[test]
fn test_fix_without_match_exits_one_and_keeps_file() {
    let dir = project();
    let output = tweak(dir.path(), &["fix", "make", "the", "viewport", "wider"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("no matching property"));
    assert!(!stderr(&output).contains("panicked"));
    assert_eq!(
        fs::read_to_string(dir.path().join("timeline-dev.css")).unwrap(),
        STYLESHEET
    );
}

#[test]
fn test_fix_unrecognized_request_lists_keywords() {
    let dir = project();
    let output = tweak(dir.path(), &["fix", "please", "improve", "things"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Try: border, timeline, filter"));
}

#[test]
fn test_missing_stylesheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = tweak(dir.path(), &["fix", "border", "thinner"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("timeline-dev.css"));
}

#[test]
fn test_get_prints_value() {
    let dir = project();
    let output = tweak(dir.path(), &["get", ".nav-arrow", "font-size"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "24px\n");
}

#[test]
fn test_nudge_dry_run_does_not_write() {
    let dir = project();
    let output = tweak(
        dir.path(),
        &["nudge", ".nav-arrow", "font-size", "grow", "--dry-run"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Would change to: 36px"));
    assert_eq!(
        fs::read_to_string(dir.path().join("timeline-dev.css")).unwrap(),
        STYLESHEET
    );
}

#[test]
fn test_nudge_rejects_unknown_action_as_usage_error() {
    let dir = project();
    let output = tweak(dir.path(), &["nudge", ".nav-arrow", "font-size", "explode"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_file_selects_stylesheet() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("styles")).unwrap();
    fs::write(dir.path().join("styles/site.css"), STYLESHEET).unwrap();
    fs::write(
        dir.path().join("tweak.yaml"),
        "stylesheet: styles/site.css\npreview_url: http://localhost:8000/\n",
    )
    .unwrap();

    let output = tweak(dir.path(), &["nudge", ".nav-arrow", "font-size", "shrink"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Check http://localhost:8000/"));
    let css = fs::read_to_string(dir.path().join("styles/site.css")).unwrap();
    assert!(css.contains("font-size: 12px;"));
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = project();
    fs::write(dir.path().join("tweak.yaml"), "stylsheet: typo.css\n").unwrap();

    let output = tweak(dir.path(), &["get", ".nav-arrow", "font-size"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("tweak.yaml"));
}

#[test]
fn test_splice_writes_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = "\
<body>
  <div class=\"timeline-milestones\">
    <div class=\"milestone\">old</div>
  </div>
  <footer></footer>
</body>
";
    let source = "\
<div class=\"timeline-milestones\">
  <div class=\"milestone\">new</div>
</div>
";
    fs::write(dir.path().join("timeline-test-dev.html"), target).unwrap();
    fs::write(dir.path().join("fresh.html"), source).unwrap();

    let output = tweak(dir.path(), &["splice", "--source", "fresh.html"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let spliced = fs::read_to_string(dir.path().join("timeline-test-dev-new.html")).unwrap();
    assert!(spliced.contains("new"));
    assert!(!spliced.contains("old"));
    assert!(spliced.contains("<footer></footer>"));
    assert_eq!(
        fs::read_to_string(dir.path().join("timeline-test-dev.html")).unwrap(),
        target
    );
}

#[test]
fn test_ask_dry_run_prints_prompt_and_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = tweak(
        dir.path(),
        &["ask", "change", "border", "padding", "to", "5px", "--dry-run"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Prompt: "));
    assert!(out.contains(".timeline-border-container"));
    assert!(out.contains("Command: aider"));
}

#[cfg(unix)]
#[test]
fn test_ask_runs_configured_program() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tweak.yaml"),
        "assistant:\n  program: sh\n  args: [\"-c\", \"cat\", \"sh\"]\n",
    )
    .unwrap();

    let output = tweak(dir.path(), &["ask", "make", "the", "arrows", "bigger"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("make the arrows bigger"));
}
