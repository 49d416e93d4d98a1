//! End-to-end tests for the `movie-search` binary.
//!
//! Every case here fails (or finishes) before a query embedding is needed,
//! so no model is downloaded.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn movie_search_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_movie-search"))
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("movies.csv");
    fs::write(
        &csv_path,
        "title,plot,year\n\
         Dr. No,A British agent investigates a missing colleague in Jamaica.,1962\n\
         Roman Holiday,A princess escapes her duties and explores Rome.,1953\n\
         Blank,   ,2000\n",
    )
    .unwrap();
    (tmp, csv_path)
}

fn run_movie_search(cwd: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = movie_search_binary();
    let output = Command::new(&binary)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("MOVIE_SEARCH_MODEL")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run movie-search at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_missing_csv_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.csv");

    let (stdout, stderr, success) =
        run_movie_search(tmp.path(), &["spy", "--csv", missing.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.is_empty(), "unexpected stdout: {}", stdout);
    assert!(stderr.contains("Movies CSV not found at"), "stderr={}", stderr);
    assert!(stderr.contains("nope.csv"));
}

#[test]
fn test_missing_plot_column_is_schema_error() {
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("bad.csv");
    fs::write(&csv_path, "title,summary\nA,something\n").unwrap();

    let (stdout, stderr, success) =
        run_movie_search(tmp.path(), &["spy", "--csv", csv_path.to_str().unwrap()]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("CSV must contain 'title' and 'plot' columns"),
        "stderr={}",
        stderr
    );
}

#[test]
fn test_empty_query_rejected() {
    let (tmp, csv_path) = setup_test_env();

    for query in ["", "   "] {
        let (stdout, stderr, success) =
            run_movie_search(tmp.path(), &[query, "--csv", csv_path.to_str().unwrap()]);
        assert!(!success, "query {:?} should fail", query);
        assert!(stdout.is_empty());
        assert!(
            stderr.contains("Query must be a non-empty string."),
            "stderr={}",
            stderr
        );
    }
}

#[test]
fn test_non_positive_top_n_rejected() {
    let (tmp, csv_path) = setup_test_env();

    for top_n in ["0", "-1"] {
        let (stdout, stderr, success) = run_movie_search(
            tmp.path(),
            &["spy", "--top_n", top_n, "--csv", csv_path.to_str().unwrap()],
        );
        assert!(!success, "top_n {} should fail", top_n);
        assert!(stdout.is_empty());
        assert!(
            stderr.contains("top_n must be a positive integer."),
            "stderr={}",
            stderr
        );
    }
}

#[test]
fn test_empty_catalog_prints_no_results() {
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("empty.csv");
    fs::write(&csv_path, "title,plot\nOnly Blank,  \n").unwrap();

    let (stdout, stderr, success) =
        run_movie_search(tmp.path(), &["spy", "--csv", csv_path.to_str().unwrap()]);
    assert!(success, "stdout={}, stderr={}", stdout, stderr);
    assert_eq!(stdout, "No results.\n");
}

#[test]
fn test_default_catalog_from_config() {
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("catalog.csv");
    fs::write(&csv_path, "title,plot\n").unwrap();

    let config_dir = tmp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("movie-search.toml"),
        format!("[data]\ncsv = \"{}\"\n", csv_path.display()),
    )
    .unwrap();

    // ./config/movie-search.toml is picked up from the working directory
    let (stdout, stderr, success) = run_movie_search(tmp.path(), &["spy"]);
    assert!(success, "stdout={}, stderr={}", stdout, stderr);
    assert_eq!(stdout, "No results.\n");
}

#[test]
fn test_default_catalog_missing_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let absent = tmp.path().join("absent.csv");
    fs::write(
        config_dir.join("movie-search.toml"),
        format!("[data]\ncsv = \"{}\"\n", absent.display()),
    )
    .unwrap();

    let (_, stderr, success) = run_movie_search(tmp.path(), &["spy"]);
    assert!(!success);
    assert!(stderr.contains("Movies CSV not found at"), "stderr={}", stderr);
}

#[test]
fn test_explicit_missing_config_fails() {
    let (tmp, csv_path) = setup_test_env();
    let (_, stderr, success) = run_movie_search(
        tmp.path(),
        &[
            "spy",
            "--config",
            "does-not-exist.toml",
            "--csv",
            csv_path.to_str().unwrap(),
        ],
    );
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"), "stderr={}", stderr);
}

#[test]
fn test_unknown_provider_fails() {
    let (tmp, csv_path) = setup_test_env();
    let config_path = tmp.path().join("custom.toml");
    fs::write(&config_path, "[embedding]\nprovider = \"cohere\"\n").unwrap();

    let (stdout, stderr, success) = run_movie_search(
        tmp.path(),
        &[
            "spy",
            "--config",
            config_path.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ],
    );
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown embedding provider"), "stderr={}", stderr);
}

#[test]
fn test_help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    let (stdout, _, success) = run_movie_search(tmp.path(), &["--help"]);
    assert!(success);
    assert!(stdout.contains("--top_n"));
    assert!(stdout.contains("--csv"));
}
