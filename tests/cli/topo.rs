use crate::cli::support::{graphkit, stderr_json, stdout_json, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// topo
// ============================================================================

const DAG: &str = "edges:\n  - {from: A, to: C}\n  - {from: B, to: C}\n  - {from: C, to: D}\n  - {from: D, to: E}\n";

const CYCLE: &str = "edges:\n  - {from: A, to: B}\n  - {from: B, to: C}\n  - {from: C, to: A}\n";

#[test]
fn test_topo_order() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "dag.yaml", DAG);

    graphkit(dir.path())
        .args(["topo", "dag.yaml"])
        .assert()
        .success()
        .stdout("B\nA\nC\nD\nE\n");
}

#[test]
fn test_topo_json() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "dag.yml", DAG);

    let output = graphkit(dir.path())
        .args(["--format", "json", "topo", "dag.yml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["order"],
        serde_json::json!(["B", "A", "C", "D", "E"])
    );
}

#[test]
fn test_topo_cycle_exit_code_3() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "cycle.yaml", CYCLE);

    graphkit(dir.path())
        .args(["topo", "cycle.yaml"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cycle detected at vertex A"));
}

#[test]
fn test_topo_cycle_json_envelope() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "cycle.yaml", CYCLE);

    let output = graphkit(dir.path())
        .args(["--format", "json", "topo", "cycle.yaml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "cycle_detected");
    assert_eq!(json["error"]["vertex"], "A");
}

#[test]
fn test_topo_rejects_undirected_graph() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "dag.yaml", DAG);

    graphkit(dir.path())
        .args(["topo", "dag.yaml", "--undirected"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires a directed graph"));
}

#[test]
fn test_directed_flag_overrides_undirected_config() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "dag.yaml", DAG);
    write_fixture(dir.path(), "config/config.toml", "[graph]\ndirected = false\n");

    graphkit(dir.path())
        .args(["topo", "dag.yaml"])
        .assert()
        .code(2);

    graphkit(dir.path())
        .args(["topo", "dag.yaml", "--directed"])
        .assert()
        .success()
        .stdout("B\nA\nC\nD\nE\n");
}

#[test]
fn test_directed_and_undirected_flags_conflict() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "dag.yaml", DAG);

    graphkit(dir.path())
        .args(["topo", "dag.yaml", "--directed", "--undirected"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}
