//! Behavioral specs for `brandscope check-config` and `brandscope init`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// CHECK-CONFIG
// =============================================================================

/// > check-config summarizes a valid config
#[test]
fn check_config_ok() {
    let project = Project::with_brands();
    project
        .cmd()
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicates::str::contains("brands.yml: ok"))
        .stdout(predicates::str::contains("aliases:      6"))
        .stdout(predicates::str::contains("regex hints:  1"))
        .stdout(predicates::str::contains("ner_min_conf=0.7 fuzzy_min_score=86"));
}

/// > Brands referenced but not listed produce a warning, not a failure
#[test]
fn check_config_warns_on_undeclared_brand() {
    let project = Project::empty();
    project.file("brands.yml", "brands: [Samsung]\naliases: {pixel: Google}\n");
    project
        .cmd()
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicates::str::contains("warning: brand \"Google\""));
}

/// > An invalid regex hint fails the check
#[test]
fn check_config_bad_pattern() {
    let project = Project::empty();
    project.file("brands.yml", "regex_hints:\n  - {pattern: 'fold(', brand: Samsung}\n");
    project
        .cmd()
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicates::str::contains("regex_hints[0]: invalid pattern"));
}

/// > A document that is not a mapping fails the check
#[test]
fn check_config_not_a_mapping() {
    let project = Project::empty();
    project.file("brands.yml", "- galaxy\n- pixel\n");
    project
        .cmd()
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicates::str::contains("expected a mapping"));
}

/// > A missing config fails the check
#[test]
fn check_config_missing() {
    let project = Project::empty();
    project
        .cmd()
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicates::str::contains("config not found"));
}

// =============================================================================
// INIT
// =============================================================================

/// > init writes a starter config that check-config accepts
#[test]
fn init_creates_valid_config() {
    let project = Project::empty();
    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Created brands.yml"));

    project.cmd().arg("check-config").assert().success();
    project
        .cmd()
        .args(["resolve", "battery life of Galaxy Z Fold 5"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Samsung (regex-hint, 0.95)"));
}

/// > init refuses to overwrite without --force
#[test]
fn init_refuses_overwrite() {
    let project = Project::empty();
    project.file("brands.yml", "aliases: {acme: Acme}\n");
    project
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
    assert_eq!(project.read("brands.yml"), "aliases: {acme: Acme}\n");
}

/// > init --force overwrites
#[test]
fn init_force_overwrites() {
    let project = Project::empty();
    project.file("brands.yml", "aliases: {acme: Acme}\n");
    project.cmd().args(["init", "--force"]).assert().success();
    assert!(project.read("brands.yml").contains("regex_hints"));
}

/// > init creates parent directories of --config
#[test]
fn init_nested_path() {
    let project = Project::empty();
    project.cmd().args(["init", "-C", "conf/brands.yml"]).assert().success();
    assert!(project.join("conf/brands.yml").exists());
}
