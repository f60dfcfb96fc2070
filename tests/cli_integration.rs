//! Integration tests for the `mw` CLI.
//!
//! Each test runs `mw` as a subprocess, feeding scripts and config files
//! from a temp directory, and verifies stdout and exit status.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the path to the built `mw` binary.
fn mw_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("mw");
    path
}

/// Run `mw` with the given args in `dir`, return (stdout, stderr, success).
fn run_mw(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(mw_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("WANDER_LOG")
        .output()
        .expect("failed to run mw");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `mw` expecting success, return stdout.
fn run_mw_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_mw(dir, args);
    if !success {
        panic!(
            "mw {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

const SCENARIO: &str = r#"# record one episode, then a rejected one
{"action":"update_draft","field":"description","value":"Lost focus during review"}
{"action":"toggle_trigger","name":"Boredom"}
{"action":"commit_episode"}

{"action":"update_draft","field":"description","value":"No trigger picked"}
{"action":"commit_episode"}
{"action":"toggle_component","id":1}
{"action":"toggle_component","id":3}
{"action":"update_reflection","field":"whatBroughtBack","value":"Noticing my breath"}
{"action":"save_reflection"}
"#;

fn write_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

#[test]
fn test_triggers_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mw_ok(tmp.path(), &["triggers"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Stress/Anxiety");
    assert_eq!(lines[9], "Creative Block");
}

#[test]
fn test_triggers_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mw_ok(tmp.path(), &["triggers", "--json"]);
    let triggers: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(triggers.len(), 10);
    assert!(triggers.contains(&"Waiting/Idle Time".to_string()));
}

#[test]
fn test_components_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mw_ok(tmp.path(), &["components", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let comps = value.as_array().unwrap();
    assert_eq!(comps.len(), 5);
    assert_eq!(comps[0]["title"], "Anchoring");
    assert_eq!(comps[0]["type"], "anchoring");
    assert_eq!(comps[2]["type"], "main-exercise");
    assert_eq!(comps[2]["duration"], "25 min");
    assert!(comps.iter().all(|c| c["completed"] == false));
    assert!(comps[1].get("content").is_none());
}

#[test]
fn test_components_text() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mw_ok(tmp.path(), &["components"]);
    assert!(out.contains("Anchoring (5 min)"));
    assert!(out.contains("Take-Aways (5 min)"));
    assert!(out.contains("    1. "));
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

#[test]
fn test_replay_text_summary() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "week2.jsonl", SCENARIO);
    let out = run_mw_ok(tmp.path(), &["replay", &script]);

    assert!(out.contains("recorded episode"));
    assert!(out.contains("episode not recorded (missing triggers)"));
    assert!(out.contains("--- reflection saved ---"));
    assert!(out.contains("Noticing my breath"));
    assert!(out.contains("Episodes: 1  Total minutes: 0"));
    assert!(out.contains("Lost focus during review"));
    assert!(out.contains("triggers: Boredom"));
    assert!(out.contains("Components: 2 of 5 completed"));
}

#[test]
fn test_replay_json_lines() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "week2.jsonl", SCENARIO);
    let out = run_mw_ok(tmp.path(), &["replay", &script, "--json"]);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let snapshot: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(snapshot["whatBroughtBack"], "Noticing my breath");
    assert_eq!(snapshot["goalsNextWeek"], "");

    let summary: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    let episodes = summary["episodes"].as_array().unwrap();
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0]["description"], "Lost focus during review");
    assert_eq!(episodes[0]["triggers"], serde_json::json!(["Boredom"]));
    assert_eq!(episodes[0]["intensity"], 5);
    assert_eq!(summary["stats"]["count"], 1);
    assert_eq!(summary["checklist"]["completed"], 2);
    assert_eq!(summary["checklist"]["ratio"], 0.4);
    assert_eq!(summary["outcomes"][4]["outcome"], "episode_rejected");
    assert_eq!(summary["outcomes"][4]["missing_triggers"], true);
}

#[test]
fn test_replay_total_minutes() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(
        tmp.path(),
        "minutes.jsonl",
        r#"{"action":"update_draft","field":"description","value":"first"}
{"action":"update_draft","field":"duration","value":"10"}
{"action":"toggle_trigger","name":"Fatigue"}
{"action":"commit_episode"}
{"action":"update_draft","field":"description","value":"second"}
{"action":"update_draft","field":"duration","value":"15"}
{"action":"toggle_trigger","name":"Fatigue"}
{"action":"commit_episode"}
"#,
    );
    let out = run_mw_ok(tmp.path(), &["replay", &script, "--json"]);
    let summary: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(summary["stats"]["count"], 2);
    assert_eq!(summary["stats"]["total_minutes"], 25);
    assert_eq!(summary["trigger_counts"][0]["trigger"], "Fatigue");
    assert_eq!(summary["trigger_counts"][0]["count"], 2);
}

#[test]
fn test_replay_from_stdin() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut child = Command::new(mw_bin())
        .args(["replay", "-"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run mw");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(SCENARIO.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("Episodes: 1"));
}

#[test]
fn test_replay_bad_line_names_line() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(
        tmp.path(),
        "bad.jsonl",
        "{\"action\":\"commit_episode\"}\n\n{\"action\":\"explode\"}\n",
    );
    let (stdout, stderr, success) = run_mw(tmp.path(), &["replay", &script]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: line 3:"), "stderr: {}", stderr);
}

#[test]
fn test_replay_missing_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_mw(tmp.path(), &["replay", "nope.jsonl"]);
    assert!(!success);
    assert!(stderr.contains("cannot open 'nope.jsonl'"));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn test_verbose_logs_to_stderr() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "week2.jsonl", SCENARIO);
    let (_, stderr, success) = run_mw(tmp.path(), &["replay", &script, "-v"]);
    assert!(success);
    assert!(stderr.contains("replay finished"));
}

#[test]
fn test_log_file_receives_events() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = write_script(tmp.path(), "week2.jsonl", SCENARIO);
    let log = tmp.path().join("mw.log");
    let (_, stderr, success) = run_mw(
        tmp.path(),
        &["replay", &script, "-v", "--log-file", &log.to_string_lossy()],
    );
    assert!(success);
    assert!(stderr.is_empty());
    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("replay finished"));
    assert!(!text.contains('\u{1b}'));
}
