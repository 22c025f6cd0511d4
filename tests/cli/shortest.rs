use crate::cli::support::{graphkit, stdout_json, write_fixture, WEIGHTED_DEMO};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// dijkstra
// ============================================================================

#[test]
fn test_dijkstra_distance_table() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", WEIGHTED_DEMO);

    graphkit(dir.path())
        .args(["dijkstra", "graph.json", "--source", "A"])
        .assert()
        .success()
        .stdout("A  0\nB  1\nC  3\nD  4\n");
}

#[test]
fn test_dijkstra_path_to_target() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", WEIGHTED_DEMO);

    graphkit(dir.path())
        .args(["dijkstra", "graph.json", "--source", "A", "--target", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"))
        .stdout(predicate::str::contains("distance: 4"));
}

#[test]
fn test_dijkstra_json_marks_unreachable_as_null() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", WEIGHTED_DEMO);

    let output = graphkit(dir.path())
        .args(["--format", "json", "dijkstra", "graph.json", "--source", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "C");
    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 4);
    assert_eq!(distances[0]["vertex"], "A");
    assert!(distances[0]["distance"].is_null());
    assert_eq!(distances[3]["vertex"], "D");
    assert_eq!(distances[3]["distance"], 1.0);
}

#[test]
fn test_dijkstra_unreachable_target() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", WEIGHTED_DEMO);

    graphkit(dir.path())
        .args(["dijkstra", "graph.json", "--source", "D", "--target", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from D to A"));

    let output = graphkit(dir.path())
        .args([
            "--format", "json", "dijkstra", "graph.json", "--source", "D", "--target", "A",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert!(json["distance"].is_null());
    assert!(json["path"].is_null());
}

#[test]
fn test_dijkstra_missing_source_and_target() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "graph.json", WEIGHTED_DEMO);

    graphkit(dir.path())
        .args(["dijkstra", "graph.json", "--source", "Q"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid source vertex"));

    graphkit(dir.path())
        .args(["dijkstra", "graph.json", "--source", "A", "--target", "Q"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid target vertex"));
}
