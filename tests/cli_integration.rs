// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the gridgraph CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A gridgraph command isolated from the user's config
fn gridgraph(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gridgraph").expect("binary is built");
    cmd.env("GRIDGRAPH_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}

/// Write a matrix file into the temp dir
fn write_matrix(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// Four nodes on a square with heavier diagonals
const SQUARE: &str = "\
# square
,1,5,1
,,1,5
,,,1
,,,
";

#[test]
fn test_build_text_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "m.csv", ",5,\n,,2.5\n,,\n");

    gridgraph(&dir)
        .args(["build", &file, "--symmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 nodes, 2 edges"))
        .stdout(predicate::str::contains("0 -- 1  5"))
        .stdout(predicate::str::contains("1 -- 2  2.5"));
}

#[test]
fn test_build_json_from_edges() {
    let dir = TempDir::new().unwrap();

    let output = gridgraph(&dir)
        .args(["--json", "build", "--nodes", "2", "--edge", "0,1,", "--edge", "1,0,7"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["nodes"], serde_json::json!([0, 1]));
    assert_eq!(value["edges"][0]["weight"], serde_json::json!(7.0));
}

#[test]
fn test_build_dot_from_json_file() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "m.json", r#"[[null, "4"], [null, null]]"#);

    gridgraph(&dir)
        .args(["build", &file, "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph matrix {"))
        .stdout(predicate::str::contains("0 -- 1 [label=\"4\"];"));
}

#[test]
fn test_build_from_stdin() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["build", "-"])
        .write_stdin(",abc\n3,\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 nodes, 1 edges"));
}

#[test]
fn test_build_rejects_ragged_matrix() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "m.csv", "1,2,3\n4,5,6\n");

    gridgraph(&dir)
        .args(["build", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not square"));
}

#[test]
fn test_node_limit_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "max_nodes = 3\n").unwrap();

    gridgraph(&dir)
        .args(["build", "--nodes", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 3"));
}

#[test]
fn test_mst_both_algorithms() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "square.csv", SQUARE);

    for algorithm in ["prim", "kruskal"] {
        gridgraph(&dir)
            .args(["mst", &file, "--symmetric", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("({algorithm}): total weight 3")));
    }
}

#[test]
fn test_mst_reports_forest() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["mst", "--nodes", "4", "--edge", "0,1,1", "--edge", "2,3,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spanning forest of 2 trees"));
}

#[test]
fn test_mst_uses_configured_symmetry() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "symmetric = true\n").unwrap();
    let file = write_matrix(&dir, "m.csv", ",,\n4,,\n,,\n");

    // Lower cell only: ignored when symmetric, read with --asymmetric
    gridgraph(&dir)
        .args(["mst", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 0"));

    gridgraph(&dir)
        .args(["mst", &file, "--asymmetric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 4"));
}

#[test]
fn test_dfs_over_spanning_tree() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "square.csv", SQUARE);

    gridgraph(&dir)
        .args(["dfs", &file, "--symmetric", "--start", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS preorder: 1 -> "));
}

#[test]
fn test_dfs_bad_start() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["dfs", "--nodes", "2", "--start", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_tsp_json() {
    let dir = TempDir::new().unwrap();
    let file = write_matrix(&dir, "square.csv", SQUARE);

    let output = gridgraph(&dir)
        .args(["tsp", &file, "--symmetric", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tour: gridgraph::types::Tour = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tour.order, vec![0, 1, 2, 3, 0]);
    assert!((tour.cost - 4.0).abs() < 1e-9);
}

#[test]
fn test_tsp_disconnected_fails() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["tsp", "--nodes", "3", "--edge", "0,1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disconnected"));
}

#[test]
fn test_sun_altitude_reweights_edges() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["build", "--nodes", "2", "--edge", "0,1,10", "--sun-altitude", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 20"));
}

#[test]
fn test_shadow() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["shadow", "--height", "10", "--altitude", "45", "--azimuth", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shadow length: 10.00 m"))
        .stdout(predicate::str::contains("Bearing: 0.00"));

    gridgraph(&dir)
        .args(["shadow", "--altitude", "-3", "--azimuth", "270"])
        .assert()
        .success()
        .stdout(predicate::str::contains("below the horizon"));
}

#[test]
fn test_convert() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["convert", "255", "--from", "10", "--to", "16"])
        .assert()
        .success()
        .stdout("ff\n");

    gridgraph(&dir)
        .args(["convert", "12", "--from", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid base-2 number"));
}

#[test]
fn test_config_init_and_get() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir).args(["config", "--init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    gridgraph(&dir)
        .args(["config", "max_nodes"])
        .assert()
        .success()
        .stdout("20\n");

    gridgraph(&dir)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    gridgraph(&dir)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    let dir = TempDir::new().unwrap();

    for value in ["1", "yes", "true"] {
        Command::cargo_bin("gridgraph")
            .unwrap()
            .env("GRIDGRAPH_CONFIG", dir.path().join("config.toml"))
            .env("NO_COLOR", value)
            .args(["convert", "5"])
            .assert()
            .success()
            .stdout("101\n");
    }
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    gridgraph(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gridgraph"));
}
