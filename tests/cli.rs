//! Run the todo-scaffold binary against temporary directories
//!
//! Run with: cargo test --test cli

use std::fs;
use std::process::Command;

use tempfile::TempDir;
use todo_scaffold::manifest;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo-scaffold"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_wrong_directory_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("todo_app");
    fs::create_dir(&dir).unwrap();

    let output = bin().current_dir(&dir).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("to_do"), "hint names the expected suffix");
    assert!(stdout.contains("Current directory:"));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_scaffolds_current_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("to_do");
    fs::create_dir(&dir).unwrap();

    let output = bin().current_dir(&dir).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created directory: lib/app"));
    assert!(stdout.contains("Created file: lib/main.dart"));
    assert!(stdout.contains("Next steps:"));
    assert_eq!(
        fs::read_to_string(dir.join(manifest::ENTRY_POINT)).unwrap(),
        manifest::ENTRY_POINT_TEMPLATE
    );
}

#[test]
fn test_root_flag_and_json_output() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("to_do");
    fs::create_dir(&dir).unwrap();

    let output = bin()
        .current_dir(temp.path())
        .arg("--root")
        .arg(&dir)
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let events: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("every stdout line is JSON"))
        .collect();

    let written = events
        .iter()
        .filter(|e| e["event"] == "file_written")
        .count();
    assert_eq!(written, manifest::PLACEHOLDER_FILES.len() + 1);
    assert_eq!(events.last().unwrap()["event"], "completed");
    assert!(dir.join("lib/presentation/widgets/tag_selector.dart").exists());
}

#[cfg(unix)]
#[test]
fn test_failed_verify_still_exits_zero() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("to_do");
    fs::create_dir(&dir).unwrap();

    let output = bin()
        .current_dir(&dir)
        .args(["--json", "--verify", "echo nope >&2; exit 2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let last: serde_json::Value = String::from_utf8_lossy(&output.stdout)
        .lines()
        .last()
        .map(|line| serde_json::from_str(line).unwrap())
        .unwrap();
    assert_eq!(last["event"], "command_failed");
    assert_eq!(last["exit_code"], 2);
    assert_eq!(last["stderr"], "nope\n");
}

#[test]
fn test_filesystem_fault_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("to_do");
    fs::create_dir_all(dir.join("lib")).unwrap();
    fs::write(dir.join("lib/app"), "not a directory").unwrap();

    let output = bin().current_dir(&dir).output().unwrap();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to scaffold"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Next steps:"));
    assert!(!dir.join(manifest::ENTRY_POINT).exists());
}
