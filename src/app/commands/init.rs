//! Bootstrap command: resolve the environment, lay out the per-user
//! directories, and optionally persist the profile block.

use std::path::{Path, PathBuf};

use crate::domain::environment::EnvSource;
use crate::domain::profile;
use crate::domain::settings::{self, Settings};
use crate::domain::{AppError, ResolvedEnvironment, resolve};
use crate::ports::{DirOutcome, UserWorkspace};
use crate::services::render_profile_body;

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Append the environment block to the shell profile.
    pub persist: bool,
    /// Leave the command aliases out of the persisted block.
    pub no_aliases: bool,
    /// Profile to persist into; defaults to `$HOME/.bashrc`.
    pub profile: Option<PathBuf>,
    /// Skip the interactive confirmation before writing the profile.
    pub assume_yes: bool,
}

/// What happened to the profile, when persistence was requested.
#[derive(Debug)]
pub enum PersistOutcome {
    Applied(PathBuf),
    AlreadyConfigured(PathBuf),
    Declined(PathBuf),
}

#[derive(Debug)]
pub struct InitReport {
    pub resolved: ResolvedEnvironment,
    pub dir_outcomes: Vec<(PathBuf, DirOutcome)>,
    pub persist: Option<PersistOutcome>,
}

pub fn execute<E, W, C>(
    env: &E,
    workspace: &W,
    options: &InitOptions,
    confirm: C,
) -> Result<InitReport, AppError>
where
    E: EnvSource,
    W: UserWorkspace,
    C: FnOnce(&Path) -> Result<bool, AppError>,
{
    let overlay = Settings::load(&settings::settings_location(env))?;
    let resolved = resolve(env, overlay.as_ref())?;

    // Best-effort: a directory that cannot be created is recorded and
    // otherwise ignored.
    let mut dir_outcomes = Vec::new();
    for dir in resolved.user_dirs() {
        let outcome = workspace.ensure_dir(&dir);
        dir_outcomes.push((dir, outcome));
    }

    let persist = if options.persist {
        let target = match &options.profile {
            Some(path) => path.clone(),
            None => default_profile(env)?,
        };
        Some(persist_into(&resolved, workspace, options, &target, confirm)?)
    } else {
        None
    };

    Ok(InitReport { resolved, dir_outcomes, persist })
}

fn persist_into<W, C>(
    resolved: &ResolvedEnvironment,
    workspace: &W,
    options: &InitOptions,
    target: &Path,
    confirm: C,
) -> Result<PersistOutcome, AppError>
where
    W: UserWorkspace,
    C: FnOnce(&Path) -> Result<bool, AppError>,
{
    if !confirm(target)? {
        return Ok(PersistOutcome::Declined(target.to_path_buf()));
    }

    let body = render_profile_body(resolved, !options.no_aliases)?;
    let existing = workspace.read_profile(target)?;
    match profile::append_block(&existing, &body) {
        Some(content) => {
            workspace.write_profile(target, &content)?;
            Ok(PersistOutcome::Applied(target.to_path_buf()))
        }
        None => Ok(PersistOutcome::AlreadyConfigured(target.to_path_buf())),
    }
}

/// Default persistence target for the invoking user.
pub fn default_profile(env: &impl EnvSource) -> Result<PathBuf, AppError> {
    env.non_empty("HOME")
        .map(|home| PathBuf::from(home).join(".bashrc"))
        .ok_or_else(|| AppError::configuration("HOME environment variable not set"))
}

/// The fixed summary printed after a successful bootstrap.
pub fn summary(resolved: &ResolvedEnvironment) -> String {
    format!(
        "GeoMonitor environment\n  Prefix:       {}\n  Source root:  {}\n  Database:     {}\n  Module path:  {}",
        resolved.prefix.display(),
        resolved.source.display(),
        resolved.database.display(),
        resolved.module_dir().display(),
    )
}
