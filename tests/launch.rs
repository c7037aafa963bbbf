//! Integration tests for the session launcher.
//!
//! Covers:
//! - Argument validation (arity, help, malformed year/session)
//! - Reset-before-run ordering against the engine
//! - Exit status and messaging for completed and failed sessions

mod common;

use common::TestContext;
use predicates::prelude::*;

// ---------------------------------------------------------------------------
// Argument validation
// ---------------------------------------------------------------------------

#[test]
fn run_requires_both_positionals() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required arguments were not provided"));

    ctx.cli()
        .args(["run", "2024"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn run_rejects_extra_positionals() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "2024", "0010", "0020"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn run_help_shows_usage_without_touching_the_engine() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(0);

    ctx.cli()
        .args(["run", "-h"])
        .env("GEOMON_EXTERNAL", &external)
        .assert()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("<YEAR>"));

    assert_eq!(ctx.engine_calls(), "");
    assert!(!ctx.user_root().exists(), "help must not create directories");
}

#[test]
fn run_rejects_a_malformed_year() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(0);

    ctx.cli()
        .args(["run", "20x4", "0010"])
        .env("GEOMON_EXTERNAL", &external)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid year '20x4'"));

    assert_eq!(ctx.engine_calls(), "");
}

#[test]
fn run_rejects_a_malformed_session_code() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(0);

    ctx.cli()
        .args(["run", "2024", "001"])
        .env("GEOMON_EXTERNAL", &external)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session '001'"));

    assert_eq!(ctx.engine_calls(), "");
}

// ---------------------------------------------------------------------------
// Engine delegation
// ---------------------------------------------------------------------------

#[test]
fn successful_run_resets_before_running_and_exits_zero() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(0);

    ctx.cli()
        .args(["run", "2024", "0010"])
        .env("GEOMON_EXTERNAL", &external)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Session 0010 completed at "));

    assert_eq!(ctx.engine_calls(), "reset\nrun\n");
}

#[test]
fn engine_children_see_the_extended_search_path() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(0);

    ctx.cli().args(["run", "2024", "0010"]).env("GEOMON_EXTERNAL", &external).assert().success();

    // The external-tools root exists, so the launcher appended it.
    let seen = ctx.engine_search_path();
    assert!(
        seen.split(':').any(|token| token.trim_end() == external.display().to_string()),
        "expected {} in PATH, got: {seen}",
        external.display()
    );
}

#[test]
fn failed_run_names_the_pcf_and_session() {
    let ctx = TestContext::new();
    let external = ctx.install_fake_engine(7);

    ctx.cli()
        .args(["run", "2024", "0010"])
        .env("GEOMON_EXTERNAL", &external)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("PCF 'FINAL' aborted for session 0010"));

    // Reset still preceded the failed run; no retry happened.
    assert_eq!(ctx.engine_calls(), "reset\nrun\n");
}

#[test]
fn missing_engine_installation_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "2024", "0010"])
        .env("GEOMON_EXTERNAL", ctx.home().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing engine unavailable"));
}

// ---------------------------------------------------------------------------
// Mock engine
// ---------------------------------------------------------------------------

#[test]
fn mock_run_previews_reset_before_run() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["run", "2024", "0010", "--mock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== MOCK MODE ==="))
        .stdout(predicate::str::contains("✅ Session 0010 completed at "))
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let reset_at = stdout.find("Would reset control state").expect("reset preview missing");
    let run_at = stdout.find("Would run session").expect("run preview missing");
    assert!(reset_at < run_at, "reset must precede run in:\n{stdout}");
}

#[test]
fn mock_run_honors_the_simulated_error_status() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "2024", "0010", "--mock"])
        .env("GEOMON_MOCK_ERROR", "1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("0010"));
}
