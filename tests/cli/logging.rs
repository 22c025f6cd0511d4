use crate::cli::support::{graphkit, write_fixture, TREE_DEMO};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);

    graphkit(dir.path())
        .args(["--verbose", "bfs", "tree.json", "--start", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("graph loaded"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);

    graphkit(dir.path())
        .args(["--log-level", "warn", "bfs", "tree.json", "--start", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_search_stats_logged_at_debug() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);

    graphkit(dir.path())
        .args(["--log-level", "debug", "dijkstra", "tree.json", "--source", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_stats"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);

    let output = graphkit(dir.path())
        .args(["--verbose", "--log-json", "bfs", "tree.json", "--start", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("at least one log line");
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}

#[test]
fn test_log_level_from_config_file() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);
    write_fixture(dir.path(), "config/config.toml", "log_level = \"debug\"\n");

    graphkit(dir.path())
        .args(["bfs", "tree.json", "--start", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_verbose_overrides_config_log_level() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "tree.json", TREE_DEMO);
    write_fixture(dir.path(), "config/config.toml", "log_level = \"warn\"\n");

    graphkit(dir.path())
        .args(["--verbose", "bfs", "tree.json", "--start", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));

    graphkit(dir.path())
        .args(["bfs", "tree.json", "--start", "A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}
