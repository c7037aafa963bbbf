//! Shared testing utilities for geomon CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Suite variables scrubbed from every test invocation so a developer's
/// own environment cannot leak into assertions.
const SUITE_VARS: [&str; 13] = [
    "GEOMON_PREFIX",
    "GEOMON_SOURCE",
    "GEOMON_EXTERNAL",
    "GEOMON_CONFIG",
    "GEOMON_WEB",
    "GEOMON_DOCS",
    "GEOMON_DB",
    "GEOMON_WORKPOOL",
    "GEOMON_HELP",
    "GEOMON_USER",
    "GEOMON_META",
    "GEOMON_PROJECT",
    "GEOMON_MOCK_ERROR",
];

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `geomon` binary with an
    /// isolated environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("geomon").expect("Failed to locate geomon binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env("USER", "tester");
        for var in SUITE_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The per-user suite root under the emulated `$HOME`.
    pub fn user_root(&self) -> PathBuf {
        self.home().join("geomon")
    }

    pub fn marker_path(&self) -> PathBuf {
        self.user_root().join(".current_project")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.home().join(".bashrc")
    }

    pub fn read_profile(&self) -> String {
        fs::read_to_string(self.profile_path()).expect("profile should exist")
    }

    /// Install fake engine control programs under `<home>/external`.
    /// Each invocation appends its name to `<home>/engine_calls.log`;
    /// `bpe_run` exits with `run_exit`. Returns the external-tools root
    /// to pass as `GEOMON_EXTERNAL`.
    pub fn install_fake_engine(&self, run_exit: i32) -> PathBuf {
        let external = self.home().join("external");
        let bin = external.join("bernese").join("bin");
        fs::create_dir_all(&bin).expect("Failed to create fake engine bin directory");

        let log = self.home().join("engine_calls.log");
        let path_capture = self.home().join("engine_path.txt");
        write_script(
            &bin.join("bpe_resetcpu"),
            &format!("#!/bin/sh\necho reset >> \"{}\"\nexit 0\n", log.display()),
        );
        write_script(
            &bin.join("bpe_run"),
            &format!(
                "#!/bin/sh\necho run >> \"{}\"\necho \"$PATH\" > \"{}\"\nexit {run_exit}\n",
                log.display(),
                path_capture.display()
            ),
        );
        external
    }

    pub fn engine_calls(&self) -> String {
        fs::read_to_string(self.home().join("engine_calls.log")).unwrap_or_default()
    }

    /// The `PATH` the fake `bpe_run` observed.
    pub fn engine_search_path(&self) -> String {
        fs::read_to_string(self.home().join("engine_path.txt")).unwrap_or_default()
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake engine script");
    let mut perms = fs::metadata(path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to mark fake engine script executable");
}
