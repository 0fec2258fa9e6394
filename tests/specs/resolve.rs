//! Behavioral specs for `brandscope resolve`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

const LG_PRODUCT: &str = r#"[{"entity_group": "PRODUCT", "word": "LG", "score": 0.91}]"#;
const NOTHING_ORG: &str = r#"[{"entity_group": "ORG", "word": "Nothing", "score": 0.80}]"#;
const SONYY_ORG: &str = r#"[{"entity_group": "ORG", "word": "Sonyy", "score": 0.80}]"#;

// =============================================================================
// STAGES
// =============================================================================

/// > A matching regex hint resolves with confidence 0.95
#[test]
fn regex_hint_resolves() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["resolve", "battery life of galaxy fold 5"])
        .assert()
        .success()
        .stdout("battery life of galaxy fold 5 -> Samsung (regex-hint, 0.95)\n");
}

/// > Without a tagger, aliases anywhere in the text resolve with confidence 0.70
#[test]
fn alias_only_without_tagger() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["resolve", "samsung tv deals"])
        .assert()
        .success()
        .stdout("samsung tv deals -> Samsung (alias-only, 0.70)\n");
}

/// > Text with no brand reports method none
#[test]
fn no_brand() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["resolve", "weather tomorrow"])
        .assert()
        .success()
        .stdout("weather tomorrow -> no brand (none, 0.00)\n");
}

/// > A confident PRODUCT span is resolved through the alias table
#[cfg(unix)]
#[test]
fn product_span_from_tagger() {
    let project = Project::with_brands();
    let tagger = project.tagger(LG_PRODUCT);
    project
        .cmd()
        .args(["resolve", "--tagger", tagger.as_str(), "lg tv features"])
        .assert()
        .success()
        .stdout("lg tv features -> LG (ner-product-alias, 0.91, surface \"LG\")\n");
}

/// > An unknown ORG span is reported as-is
#[cfg(unix)]
#[test]
fn unknown_org_from_tagger() {
    let project = Project::with_brands();
    let tagger = project.tagger(NOTHING_ORG);
    project
        .cmd()
        .env("BRANDSCOPE_TAGGER", &tagger)
        .args(["resolve", "what does nothing make"])
        .assert()
        .success()
        .stdout(predicates::str::contains("-> Nothing (ner-org, 0.80, surface \"Nothing\")"));
}

/// > A misspelled ORG span resolves through the alias table
#[cfg(unix)]
#[test]
fn misspelled_org_from_tagger() {
    let project = Project::with_brands();
    let tagger = project.tagger(SONYY_ORG);
    project
        .cmd()
        .env("BRANDSCOPE_TAGGER", &tagger)
        .args(["resolve", "what does sonyy make"])
        .assert()
        .success()
        .stdout(predicates::str::contains("-> Sony (ner-org, 0.80, surface \"Sonyy\")"));
}

/// > A failing tagger fails the request
#[cfg(unix)]
#[test]
fn tagger_failure_is_an_error() {
    let project = Project::with_brands();
    project.file("fail.sh", "cat >/dev/null\necho model offline >&2\nexit 3\n");
    project
        .cmd()
        .args(["resolve", "--tagger", "sh fail.sh", "lg tv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("tagging unavailable"))
        .stderr(predicates::str::contains("model offline"));
}

/// > Regex hints never reach the tagger
#[cfg(unix)]
#[test]
fn regex_hint_skips_failing_tagger() {
    let project = Project::with_brands();
    project.file("fail.sh", "cat >/dev/null\nexit 3\n");
    project
        .cmd()
        .args(["resolve", "--tagger", "sh fail.sh", "galaxy flip 6"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Samsung (regex-hint"));
}

// =============================================================================
// INPUT AND OUTPUT
// =============================================================================

/// > Texts are read from stdin when none are given, skipping blank lines
#[test]
fn reads_stdin_lines() {
    let project = Project::with_brands();
    assert_cmd::Command::from_std(project.cmd())
        .arg("resolve")
        .write_stdin("lg tv\n\n   \npixel 9\n")
        .assert()
        .success()
        .stdout("lg tv -> LG (alias-only, 0.70)\npixel 9 -> Google (alias-only, 0.70)\n");
}

/// > JSON output is one object per text
#[test]
fn json_output() {
    let project = Project::with_brands();
    let output = project
        .cmd()
        .args(["resolve", "-o", "json", "galaxy z fold 5", "weather"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["text"], "galaxy z fold 5");
    assert_eq!(lines[0]["brand"], "Samsung");
    assert_eq!(lines[0]["confidence"], 0.95);
    assert_eq!(lines[0]["method"], "regex-hint");
    assert!(lines[1]["brand"].is_null());
    assert_eq!(lines[1]["method"], "none");
}

/// > --color=always forces ANSI escapes
#[test]
fn color_always() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["resolve", "--color", "always", "lg tv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > --no-color overrides --color=always
#[test]
fn no_color_wins() {
    let project = Project::with_brands();
    project
        .cmd()
        .args(["resolve", "--color", "always", "--no-color", "lg tv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

// =============================================================================
// CONFIG LOCATION
// =============================================================================

/// > A missing config file is an error
#[test]
fn missing_config_fails() {
    let project = Project::empty();
    project
        .cmd()
        .args(["resolve", "lg"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("config not found"));
}

/// > --config selects another file
#[test]
fn config_flag() {
    let project = Project::empty();
    project.file("conf/custom.yml", "aliases: {acme: Acme Inc}\n");
    project
        .cmd()
        .args(["resolve", "-C", "conf/custom.yml", "acme anvils"])
        .assert()
        .success()
        .stdout("acme anvils -> Acme Inc (alias-only, 0.70)\n");
}

/// > BRANDSCOPE_CONFIG selects another file
#[test]
fn config_env_var() {
    let project = Project::empty();
    project.file("other.yml", "aliases: {acme: Acme Inc}\n");
    project
        .cmd()
        .env("BRANDSCOPE_CONFIG", project.join("other.yml"))
        .args(["resolve", "acme"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Acme Inc"));
}
