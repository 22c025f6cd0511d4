use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Edges A->B(1), A->C(4), B->C(2), B->D(5), C->D(1)
pub const WEIGHTED_DEMO: &str = r#"{
  "edges": [
    {"from": "A", "to": "B", "weight": 1},
    {"from": "A", "to": "C", "weight": 4},
    {"from": "B", "to": "C", "weight": 2},
    {"from": "B", "to": "D", "weight": 5},
    {"from": "C", "to": "D", "weight": 1}
  ]
}"#;

/// Edges A->B, A->C, B->D, C->E
pub const TREE_DEMO: &str = r#"{
  "edges": [
    {"from": "A", "to": "B"},
    {"from": "A", "to": "C"},
    {"from": "B", "to": "D"},
    {"from": "C", "to": "E"}
  ]
}"#;

/// Get a Command for graphkit isolated from the user's config and logging
/// environment; `dir` holds the config directory and is the working dir
pub fn graphkit(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    cmd.current_dir(dir)
        .env("GRAPHKIT_CONFIG_DIR", dir.join("config"))
        .env_remove("GRAPHKIT_CONFIG")
        .env_remove("GRAPHKIT_LOG");
    cmd
}

/// Write a fixture file into `dir` and return its path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

/// Parse stderr of a finished command as JSON
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is valid JSON")
}
