//! Session launcher: Configured → Running → {Completed | Failed}.
//!
//! The launcher's whole obligation: always reset before run, always check
//! the status flag after run, never swallow a failed status. Retry policy,
//! if any, belongs to the engine.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::settings::Settings;
use crate::domain::{AppError, ResolvedEnvironment, SessionDescriptor};
use crate::ports::BatchEngine;

#[derive(Debug)]
pub struct LaunchOutcome {
    pub descriptor: SessionDescriptor,
    pub completed_at: DateTime<Local>,
}

/// Drive one session through the engine.
pub fn execute<B: BatchEngine>(
    engine: &B,
    descriptor: SessionDescriptor,
) -> Result<LaunchOutcome, AppError> {
    engine.reset_control_state(&descriptor)?;

    let status = engine.run(&descriptor)?;
    if status.error_status {
        if let Some(detail) = status.detail {
            eprintln!("{detail}");
        }
        return Err(AppError::EngineFailure {
            pcf: descriptor.pcf_file.clone(),
            session: descriptor.session.to_string(),
        });
    }

    Ok(LaunchOutcome { descriptor, completed_at: Local::now() })
}

/// Campaign area root: settings override, else `<external>/campaign`.
pub fn campaign_root(resolved: &ResolvedEnvironment, overlay: Option<&Settings>) -> PathBuf {
    overlay
        .and_then(|s| s.externals.campaign.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| resolved.external.join("campaign"))
}

/// Engine installation root: settings override, else `<external>/bernese`.
pub fn engine_root(resolved: &ResolvedEnvironment, overlay: Option<&Settings>) -> PathBuf {
    overlay
        .and_then(|s| s.externals.engine.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| resolved.external.join("bernese"))
}
