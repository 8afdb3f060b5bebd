//! Integration tests for the `check` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn check_clean_folder_exits_success() {
    let fixture = TestFixture::new();
    fixture.create_clean_instance("bench/a.cnf");
    fixture.create_clean_instance("bench/b.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .success();

    let summary = fixture.read("instance_checker_report.txt");
    assert!(summary.starts_with("Processed 2 files.\n"));
    assert!(summary.contains("There are 0 files with errors."));
    assert!(summary.contains("There are 0 files with warnings."));
}

#[test]
fn check_instance_errors_exit_one() {
    let fixture = TestFixture::new();
    fixture.create_file("bench/extra.cnf", "p cnf 1 1\n1 0\n-1 0\n");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("More clauses than announced."));
}

#[test]
fn check_strict_fails_on_warnings() {
    let fixture = TestFixture::new();
    fixture.create_file("bench/untagged.cnf", "p cnf 1 1\n1 0\n");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .success();

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench", "--strict"])
        .assert()
        .code(1);
}

#[test]
fn check_empty_folder_is_nothing_to_report() {
    let fixture = TestFixture::new();
    fixture.create_dir("bench");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nothing to report"));

    assert!(!fixture.join("instance_checker_report.txt").exists());
}

#[test]
fn check_missing_path_is_runtime_error() {
    let fixture = TestFixture::new();

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "does-not-exist"])
        .assert()
        .code(2);
}

#[test]
fn check_instance_without_variables_cannot_be_dumped() {
    let fixture = TestFixture::new();
    fixture.create_file("bench/broken.cnf", "p cnf x y\n1 0\n");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no variables were found"));
}

// =============================================================================
// Artifacts
// =============================================================================

#[test]
fn check_writes_artifacts_with_prefix() {
    let fixture = TestFixture::new();
    fixture.create_clean_instance("bench/a.cnf");
    fixture.create_file("bench/gap.cnf", "c t mc\nc file gap.cnf\np cnf 3 1\n1 3 0\n");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench", "-o", "run1"])
        .assert()
        .success();

    let summary = fixture.read("run1_report.txt");
    assert!(summary.contains("There are 1 files with warnings."));
    assert!(summary.contains("Warning type: 'Variables are not consecutive....' Times found: 1"));

    let dump = fixture.read("run1_dump.json");
    let records: Vec<serde_json::Value> = dump
        .split("\n\n")
        .filter(|r| !r.trim().is_empty())
        .map(|r| serde_json::from_str(r).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["max_found_variables"], 3);
    assert_eq!(records[1]["declared_file_name"], "gap.cnf");
}

#[test]
fn check_summary_lines_are_logged() {
    let fixture = TestFixture::new();
    fixture.create_clean_instance("one.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "one.cnf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed 1 files."))
        .stderr(predicate::str::contains("Summary of the warnings:"));
}

#[test]
fn check_quiet_hides_info_logs() {
    let fixture = TestFixture::new();
    fixture.create_clean_instance("one.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "check", "one.cnf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed").not());
}

#[test]
fn check_significant_chars_merges_message_types() {
    let fixture = TestFixture::new();
    fixture.create_file("bench/a.cnf", "p cnf 1 1\n1 0\n");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench", "--significant-chars", "4"])
        .assert()
        .success();

    let summary = fixture.read("instance_checker_report.txt");
    assert!(summary.contains("Warning type: 'File...' Times found: 2"));
}

// =============================================================================
// Discovery and configuration
// =============================================================================

#[test]
fn check_is_not_recursive_by_default() {
    let fixture = TestFixture::new();
    fixture.create_clean_instance("bench/top.cnf");
    fixture.create_clean_instance("bench/nested/deep.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench"])
        .assert()
        .success();
    assert!(fixture.read("instance_checker_report.txt").starts_with("Processed 1 files."));

    checker!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "bench", "--recursive"])
        .assert()
        .success();
    assert!(fixture.read("instance_checker_report.txt").starts_with("Processed 2 files."));
}

#[test]
fn check_uses_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nextension = \"dimacs\"\n\n[report]\noutput_prefix = \"cfg\"\n");
    fixture.create_clean_instance("bench/a.dimacs");
    fixture.create_clean_instance("bench/ignored.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["check", "bench"])
        .assert()
        .success();

    assert!(fixture.read("cfg_report.txt").starts_with("Processed 1 files."));
}

#[test]
fn check_rejects_invalid_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[report]\nsignificant_chars = 0\n");
    fixture.create_clean_instance("a.cnf");

    checker!()
        .current_dir(fixture.path())
        .args(["check", "a.cnf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("significant_chars"));
}
