//! End-to-end tests for the moviedb-stats binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const MOVIES: &str = "\
Unforgiven (1992)/Eastwood, Clint/Freeman, Morgan
Million Dollar Baby (2004)/Eastwood, Clint
Some Title/Actor A
";

fn write_movies(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Test the text report for a single file
#[test]
fn test_text_report() {
    let temp_dir = TempDir::new().unwrap();
    let movies = write_movies(&temp_dir, "movies.txt", MOVIES);

    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .arg(&movies)
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 3 unique actors in the database"))
        .stdout(predicate::str::contains("There are 2 movies featuring Eastwood, Clint"))
        .stdout(predicate::str::contains(
            "Movies featuring Eastwood, Clint: \"Unforgiven\", \"Million Dollar Baby\"",
        ))
        .stdout(predicate::str::contains(
            "There are 3 movies in the database, with 3 unique titles",
        ))
        .stdout(predicate::str::contains("Movies without a year: 1"))
        .stdout(predicate::str::contains("Best year was 1992 with 1 movies"));
}

/// Test choosing a different featured actor
#[test]
fn test_actor_flag() {
    let temp_dir = TempDir::new().unwrap();
    let movies = write_movies(&temp_dir, "movies.txt", MOVIES);

    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .args(["--actor", "Freeman, Morgan"])
        .arg(&movies)
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 1 movies featuring Freeman, Morgan"));
}

/// A missing file fails on its own; later files are still processed
#[test]
fn test_missing_file_does_not_stop_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let movies = write_movies(&temp_dir, "movies.txt", MOVIES);
    let missing = temp_dir.path().join("missing.txt");

    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .arg(&missing)
        .arg(&movies)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"))
        .stdout(predicate::str::contains("There are 3 unique actors in the database"));
}

/// Files are reported independently, with no cross-file totals
#[test]
fn test_files_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_movies(&temp_dir, "first.txt", MOVIES);
    let second = write_movies(&temp_dir, "second.txt", "Heat (1995)/Pacino, Al\n");

    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 3 movies in the database"))
        .stdout(predicate::str::contains("There are 1 movies in the database"))
        .stdout(predicate::str::contains("There are 4 movies in the database").not());
}

/// Test JSON output in parallel mode
#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let movies = write_movies(&temp_dir, "movies.txt", MOVIES);

    let output = Command::cargo_bin("moviedb-stats")
        .unwrap()
        .args(["--format", "json", "--parallel", "--batch-size", "1"])
        .arg(&movies)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report"]["titles"]["total_count"], 3);
    assert_eq!(json["report"]["unknown_year_count"], 1);
    assert_eq!(json["report"]["featured"]["movies"][1], "Million Dollar Baby");
}

/// A file with no known years reports that instead of inventing a range
#[test]
fn test_no_known_years() {
    let temp_dir = TempDir::new().unwrap();
    let movies = write_movies(&temp_dir, "movies.txt", "Some Title/Actor A\n");

    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .arg(&movies)
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies with a known year in the database"))
        .stdout(predicate::str::contains("First year").not());
}

/// At least one file is required
#[test]
fn test_requires_a_file() {
    Command::cargo_bin("moviedb-stats")
        .unwrap()
        .assert()
        .failure();
}
