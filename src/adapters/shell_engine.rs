//! Engine adapter spawning the external control programs.
//!
//! The engine installation is reached purely by convention: its control
//! programs live under `<engine_root>/bin`, and a session is described to
//! them through the engine's own environment variables. A non-zero exit
//! from `bpe_run` is the engine's error-status flag; nothing else is
//! interpreted here.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, EngineStatus, SessionDescriptor};
use crate::ports::BatchEngine;

const RESET_PROGRAM: &str = "bpe_resetcpu";
const RUN_PROGRAM: &str = "bpe_run";

#[derive(Debug, Clone)]
pub struct ShellEngine {
    engine_root: PathBuf,
    search_path: Option<String>,
}

impl ShellEngine {
    /// Engine rooted at `engine_root` (conventionally
    /// `<external>/bernese`).
    pub fn new(engine_root: PathBuf) -> Self {
        ShellEngine { engine_root, search_path: None }
    }

    /// `PATH` handed to the control programs, so the suite's tool
    /// directories are visible to whatever the engine shells out to.
    pub fn with_search_path(mut self, path: String) -> Self {
        self.search_path = Some(path);
        self
    }

    fn command(&self, program: &str, session: &SessionDescriptor) -> Command {
        let mut cmd = Command::new(self.engine_root.join("bin").join(program));
        cmd.envs(session_vars(session));
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }
        cmd.current_dir(&self.engine_root);
        cmd
    }
}

/// The engine's conventional session variables.
fn session_vars(session: &SessionDescriptor) -> Vec<(&'static str, String)> {
    vec![
        ("PCF_FILE", session.pcf_file.clone()),
        ("CPU_FILE", session.cpu_file.clone()),
        ("BPE_CAMPAIGN", session.campaign.display().to_string()),
        ("YEAR", session.year.to_string()),
        ("SESSION", session.session.to_string()),
        ("SYSOUT", session.sysout.clone()),
        ("STATUS", session.status_file.clone()),
        ("TASKID", session.task_id.clone()),
    ]
}

fn unavailable(program: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::EngineUnavailable(format!("{}: {err}", program.display()))
}

impl BatchEngine for ShellEngine {
    fn reset_control_state(&self, session: &SessionDescriptor) -> Result<(), AppError> {
        let program = self.engine_root.join("bin").join(RESET_PROGRAM);
        let status = self
            .command(RESET_PROGRAM, session)
            .status()
            .map_err(|err| unavailable(&program, err))?;
        if !status.success() {
            return Err(unavailable(&program, format!("exited with {status}")));
        }
        Ok(())
    }

    fn run(&self, session: &SessionDescriptor) -> Result<EngineStatus, AppError> {
        let program = self.engine_root.join("bin").join(RUN_PROGRAM);
        let status = self
            .command(RUN_PROGRAM, session)
            .status()
            .map_err(|err| unavailable(&program, err))?;

        Ok(EngineStatus {
            error_status: !status.success(),
            detail: status.code().map(|code| format!("{RUN_PROGRAM} exited with code {code}")),
        })
    }
}
