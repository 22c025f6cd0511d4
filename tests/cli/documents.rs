use crate::cli::support::{graphkit, stdout_json, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Graph documents and the show command
// ============================================================================

#[test]
fn test_show_adjacency_list() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "graph.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\n\n[[edges]]\nfrom = \"A\"\nto = \"C\"\n",
    );

    graphkit(dir.path())
        .args(["show", "graph.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> [B, C]\nB -> []\nC -> []\n"))
        .stdout(predicate::str::contains("3 vertices, 2 edges (directed)"));
}

#[test]
fn test_show_json_undirected_document() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "graph.yaml",
        "directed: false\nvertices: [solo]\nedges:\n  - from: x\n    to: y\n    weight: 2.5\n",
    );

    let output = graphkit(dir.path())
        .args(["--format", "json", "show", "graph.yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["directed"], false);
    assert_eq!(json["vertices"], serde_json::json!(["solo", "x", "y"]));
    // One stored edge per direction
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    assert_eq!(json["edges"][1]["from"], "y");
    assert_eq!(json["edges"][1]["weight"], 2.5);
}

#[test]
fn test_unsupported_extension_exit_code_2() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.csv", "A,B\n");

    graphkit(dir.path())
        .args(["show", "graph.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension: csv"));
}

#[test]
fn test_malformed_document_exit_code_1() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", "{\"edges\": [");

    graphkit(dir.path())
        .args(["show", "graph.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_nan_weight_rejected() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "graph.toml",
        "[[edges]]\nfrom = \"A\"\nto = \"B\"\nweight = nan\n",
    );

    graphkit(dir.path())
        .args(["show", "graph.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge weight"));
}
