use crate::cli::support::{graphkit, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Configuration resolution
// ============================================================================

const NEGATIVE_EDGE: &str = r#"{"edges": [{"from": "a", "to": "b", "weight": -3}]}"#;

#[test]
fn test_negative_weights_rejected_by_default() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "neg.json", NEGATIVE_EDGE);

    graphkit(dir.path())
        .args(["show", "neg.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative weights are rejected): -3"));
}

#[test]
fn test_config_dir_file_is_picked_up() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "neg.json", NEGATIVE_EDGE);
    write_fixture(
        dir.path(),
        "config/config.toml",
        "version = 1\n\n[graph]\nreject_negative_weights = false\n",
    );

    graphkit(dir.path())
        .args(["show", "neg.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> [b]"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "graph.json",
        r#"{"edges": [{"from": "a", "to": "b"}, {"from": "b", "to": "c"}]}"#,
    );
    write_fixture(
        dir.path(),
        "custom.toml",
        "[graph]\ndirected = false\ndefault_weight = 2.5\n",
    );

    graphkit(dir.path())
        .args([
            "--config",
            "custom.toml",
            "dijkstra",
            "graph.json",
            "--source",
            "c",
        ])
        .assert()
        .success()
        .stdout("a  5\nb  2.5\nc  0\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", r#"{"edges": []}"#);

    graphkit(dir.path())
        .args(["--config", "nope.toml", "show", "graph.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", r#"{"edges": []}"#);
    write_fixture(dir.path(), "config/config.toml", "[graph\n");

    graphkit(dir.path())
        .args(["show", "graph.json"])
        .assert()
        .code(1);
}
