use crate::cli::support::{graphkit, stdout_json, write_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// astar
// ============================================================================

const WALLED_GRID: &str = "0 1 0\n0 1 0\n0 0 0\n";

#[test]
fn test_astar_path_around_wall() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "grid.txt", WALLED_GRID);

    graphkit(dir.path())
        .args(["astar", "grid.txt", "--start", "0,0", "--goal", "2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(0, 0) -> (1, 0) -> (2, 0) -> (2, 1) -> (2, 2)",
        ))
        .stdout(predicate::str::contains("moves: 4"))
        .stdout(predicate::str::contains("*#.\n*#.\n***\n"));
}

#[test]
fn test_astar_json() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "grid.txt", WALLED_GRID);

    let output = graphkit(dir.path())
        .args([
            "--format", "json", "astar", "grid.txt", "--start", "0,0", "--goal", "2,2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["moves"], 4);
    assert_eq!(json["path"].as_array().unwrap().len(), 5);
    assert_eq!(json["start"], serde_json::json!({"row": 0, "col": 0}));
}

#[test]
fn test_astar_blocked_goal_has_no_path() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "grid.txt", WALLED_GRID);

    graphkit(dir.path())
        .args(["astar", "grid.txt", "--start", "0,0", "--goal", "0,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from (0, 0) to (0, 1)"));
}

#[test]
fn test_astar_out_of_bounds_exit_code_2() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "grid.txt", WALLED_GRID);

    graphkit(dir.path())
        .args(["astar", "grid.txt", "--start", "0,0", "--goal", "9,9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid goal vertex"));
}

#[test]
fn test_astar_ragged_grid_exit_code_2() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "grid.txt", "000\n00\n");

    graphkit(dir.path())
        .args(["astar", "grid.txt", "--start", "0,0", "--goal", "1,1"])
        .assert()
        .code(2);
}
