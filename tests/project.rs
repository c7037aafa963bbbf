//! Integration tests for project selection and the marker file.

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn use_lays_out_the_project_and_writes_the_marker() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["project", "use", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Active project: alpha"));

    assert!(ctx.user_root().join("workpool/alpha/outputs").is_dir());
    assert!(ctx.user_root().join("workpool/alpha/logs").is_dir());
    assert_eq!(fs::read_to_string(ctx.marker_path()).unwrap(), "alpha\n");
}

#[test]
fn use_overwrites_a_previous_selection() {
    let ctx = TestContext::new();

    ctx.cli().args(["project", "use", "alpha"]).assert().success();
    ctx.cli().args(["project", "use", "bravo"]).assert().success();

    assert_eq!(fs::read_to_string(ctx.marker_path()).unwrap(), "bravo\n");
    // The first project's layout is never auto-deleted.
    assert!(ctx.user_root().join("workpool/alpha/outputs").is_dir());
}

#[test]
fn use_rejects_an_empty_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["project", "use", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!ctx.marker_path().exists());
}

#[test]
fn use_rejects_path_traversal_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["project", "use", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!ctx.home().join("escape").exists());
}

#[test]
fn current_defaults_when_nothing_is_selected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["project", "current"])
        .assert()
        .success()
        .stdout(predicate::str::diff("default\n"));
}

#[test]
fn current_falls_back_to_the_marker_file() {
    let ctx = TestContext::new();
    ctx.cli().args(["project", "use", "alpha"]).assert().success();

    // GEOMON_PROJECT is scrubbed by the harness, so only the marker is left.
    ctx.cli()
        .args(["project", "current"])
        .assert()
        .success()
        .stdout(predicate::str::diff("alpha\n"));
}

#[test]
fn current_prefers_the_environment_variable() {
    let ctx = TestContext::new();
    ctx.cli().args(["project", "use", "alpha"]).assert().success();

    ctx.cli()
        .args(["project", "current"])
        .env("GEOMON_PROJECT", "beta")
        .assert()
        .success()
        .stdout(predicate::str::diff("beta\n"));
}
