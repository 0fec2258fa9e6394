//! Behavioral specs for `brandscope batch`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

const HEADER: &str = "id,timestamp,text,brand,surface,confidence,method,error";

/// > --sample seeds prompts.csv and processes it
#[test]
fn sample_run() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["batch", "--sample"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Created sample input file: prompts.csv"))
        .stdout(predicates::str::contains("Done. Processed: 3, errors: 0"));

    let csv = project.read("outputs.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "1,2025-10-20T10:00:00Z,battery life of galaxy fold 5,Samsung,,0.95,regex-hint,",
            "2,2025-10-20T10:05:00Z,lg tv features and specifications,LG,,0.7,alias-only,",
            "3,2025-10-20T10:10:00Z,compare iphone 15 pro vs pixel 9,Apple,,0.7,alias-only,",
        ]
    );
    assert_eq!(project.read("outputs.jsonl").lines().count(), 3);
}

/// > Outputs are appended across runs, header written once
#[test]
fn runs_append() {
    let project = Project::with_brands();
    project.file("prompts.csv", "id,timestamp,text\n1,t,lg tv\n");
    project.cmd().arg("batch").assert().success();
    project.cmd().arg("batch").assert().success();

    let csv = project.read("outputs.csv");
    assert_eq!(csv.lines().filter(|l| *l == HEADER).count(), 1);
    assert_eq!(csv.lines().count(), 3);
    assert_eq!(project.read("outputs.jsonl").lines().count(), 2);
}

/// > Custom input and output paths
#[test]
fn custom_paths() {
    let project = Project::with_brands();
    project.file("in/queries.csv", "id,timestamp,text\nq1,t,pixel 9 camera\n");
    project
        .cmd()
        .args(["batch", "-i", "in/queries.csv", "-o", "res.csv", "--jsonl", "res.jsonl"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Processed: 1"));

    let line = project.read("res.jsonl");
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["id"], "q1");
    assert_eq!(value["result"]["brand"], "Google");
}

/// > A missing input without --sample is an error
#[test]
fn missing_input_fails() {
    let project = Project::with_brands();
    project
        .cmd()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicates::str::contains("prompts.csv"));
}

/// > Tagger failures are recorded per row and do not stop the run
#[cfg(unix)]
#[test]
fn tagger_failures_are_recorded() {
    let project = Project::with_brands();
    project.file("fail.sh", "cat >/dev/null\nexit 3\n");
    project
        .cmd()
        .args(["batch", "--sample", "--retries", "0", "--tagger", "sh fail.sh"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Done. Processed: 3, errors: 2"));

    let csv = project.read("outputs.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].contains("regex-hint"));
    assert!(lines[2].contains(",error,"));
    assert!(lines[3].contains(",error,"));
}
