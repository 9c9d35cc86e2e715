use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

fn run_scenelinks(args: &[&OsStr]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_scenelinks"))
        .args(args)
        .output()
        .expect("Failed to run scenelinks")
}

/// Test that --stats-out creates a valid JSON file with the expected structure
#[test]
fn test_stats_output_json_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root_path = temp_dir.path().join("scripts");
    fs::create_dir_all(&root_path).unwrap();
    fs::write(root_path.join("diner.txt"), DINER_SCRIPT).expect("Failed to write test file");

    let stats_file = temp_dir.path().join("stats.json");
    let output = run_scenelinks(&[
        root_path.as_os_str(),
        OsStr::new("--stats-out"),
        stats_file.as_os_str(),
        OsStr::new("--no-progress"),
    ]);
    assert!(output.status.success(), "scenelinks failed: {}", String::from_utf8_lossy(&output.stderr));

    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_file).expect("Failed to read stats file"))
        .expect("Failed to parse JSON");
    let obj = stats.as_object().expect("Stats should be a JSON object");
    for key in [
        "run_start",
        "total_processing_time_ms",
        "total_bytes_processed",
        "total_scenes",
        "total_interacting_pairs",
        "files_processed",
        "files_skipped",
        "files_failed",
        "file_stats",
    ] {
        assert!(obj.contains_key(key), "Missing {key} field");
    }

    assert_eq!(obj["files_processed"].as_u64(), Some(1));
    assert_eq!(obj["files_failed"].as_u64(), Some(0));
    assert_eq!(obj["total_scenes"].as_u64(), Some(2));
    assert_eq!(obj["total_interacting_pairs"].as_u64(), Some(4));

    let file_stats = obj["file_stats"].as_array().expect("file_stats should be an array");
    assert_eq!(file_stats.len(), 1);
    assert_eq!(file_stats[0]["status"], "success");
    assert!(file_stats[0]["error"].is_null());
    assert!(root_path.join("diner_interactions.tsv").exists());

    // Second run finds the outputs and skips the screenplay
    let output = run_scenelinks(&[
        root_path.as_os_str(),
        OsStr::new("--stats-out"),
        stats_file.as_os_str(),
        OsStr::new("--no-progress"),
    ]);
    assert!(output.status.success());
    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_file).unwrap()).unwrap();
    assert_eq!(stats["files_skipped"].as_u64(), Some(1));
    assert_eq!(stats["files_processed"].as_u64(), Some(0));
}

#[test]
fn test_missing_root_dir_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope");

    let output = run_scenelinks(&[missing.as_os_str(), OsStr::new("--no-progress")]);
    assert!(!output.status.success());
}

#[test]
fn test_keep_prelude_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root_path = temp_dir.path().join("scripts");
    fs::create_dir_all(&root_path).unwrap();
    fs::write(root_path.join("prelude.txt"), PRELUDE_SCRIPT).unwrap();
    let stats_file = temp_dir.path().join("stats.json");

    let output = run_scenelinks(&[
        root_path.as_os_str(),
        OsStr::new("--keep-prelude"),
        OsStr::new("--stats-out"),
        stats_file.as_os_str(),
        OsStr::new("--no-progress"),
    ]);
    assert!(output.status.success(), "scenelinks failed: {}", String::from_utf8_lossy(&output.stderr));

    let table = fs::read_to_string(root_path.join("prelude_interactions.tsv")).unwrap();
    assert!(table.contains("HOST\tNARRATOR\t1\t0"));
    assert!(table.contains("ANN\tBEN\t1\t0"));

    // The kept prelude is not a numbered scene
    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_file).expect("Failed to read stats file"))
        .expect("Failed to parse JSON");
    assert_eq!(stats["total_scenes"].as_u64(), Some(1));
    let complexity = fs::read_to_string(root_path.join("prelude_complexity.tsv")).unwrap();
    assert_eq!(complexity.lines().count() - 1, 1);
}
