use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const APPLICANTS: &str = "\
A X 3.9 Eng Math CS
B Y 3.5 Eng Math CS
C Z 3.8 Eng Math CS
";

fn workspace(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("applicants.txt"), contents).expect("write applicants");
    dir
}

fn admissions(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("admissions").expect("binary built");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("ADMISSIONS_APPLICANTS_FILE")
        .env_remove("ADMISSIONS_PREFERENCES")
        .env_remove("ADMISSIONS_MALFORMED_LINES")
        .env_remove("ADMISSIONS_LOG_LEVEL");
    cmd
}

#[test]
fn reads_capacity_from_stdin_and_prints_roster() {
    let dir = workspace(APPLICANTS);

    admissions(dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout("Eng\nA X 3.90\nC Z 3.80\n\nMath\nB Y 3.50\n\n");
}

#[test]
fn capacity_flag_skips_stdin() {
    let dir = workspace(APPLICANTS);

    admissions(dir.path())
        .args(["--capacity", "1"])
        .assert()
        .success()
        .stdout("CS\nB Y 3.50\n\nEng\nA X 3.90\n\nMath\nC Z 3.80\n\n");
}

#[test]
fn json_output_reports_unplaced_applicants() {
    let dir = workspace(APPLICANTS);

    admissions(dir.path())
        .args(["--capacity", "1", "--preferences", "1", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unplaced\""))
        .stdout(predicate::str::contains("\"name\": \"C Z\""));
}

#[test]
fn missing_applicants_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");

    admissions(dir.path())
        .write_stdin("2\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("application error: intake error"));
}

#[test]
fn non_integer_capacity_is_fatal() {
    let dir = workspace(APPLICANTS);

    admissions(dir.path())
        .write_stdin("two\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("capacity 'two' must be a non-negative integer"));
}

#[test]
fn malformed_line_names_its_line_number() {
    let dir = workspace("A X 3.9 Eng Math CS\nB Y oops Eng Math CS\n");

    admissions(dir.path())
        .write_stdin("2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: GPA 'oops' is not a finite number"));
}

#[test]
fn skip_malformed_keeps_valid_records() {
    let dir = workspace("A X 3.9 Eng Math CS\nB Y oops Eng Math CS\n");

    admissions(dir.path())
        .args(["--capacity", "2", "--skip-malformed"])
        .assert()
        .success()
        .stdout("Eng\nA X 3.90\n\n");
}

#[test]
fn csv_input_is_detected_from_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cohort.csv");
    fs::write(
        &path,
        "first,last,gpa,d1,d2,d3\nA,X,3.9,Eng,Math,CS\nB,Y,3.5,Eng,Math,CS\n",
    )
    .expect("write csv");

    admissions(dir.path())
        .arg("--applicants")
        .arg(&path)
        .args(["--capacity", "1"])
        .assert()
        .success()
        .stdout("Eng\nA X 3.90\n\nMath\nB Y 3.50\n\n");
}
