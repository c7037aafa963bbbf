//! Active-project selection.

use crate::domain::environment::EnvSource;
use crate::domain::project::{self, DEFAULT_PROJECT, PROJECT_ENV};
use crate::domain::settings::{self, Settings};
use crate::domain::{AppError, resolve};
use crate::ports::UserWorkspace;

/// Activate `name`: create its output directories, overwrite the marker
/// file, and report the new active project.
///
/// Unlike bootstrap, the project layout is required, so directory
/// creation failures are hard errors here.
pub fn use_project<E, W>(env: &E, workspace: &W, name: &str) -> Result<String, AppError>
where
    E: EnvSource,
    W: UserWorkspace,
{
    let name = project::validate_name(name)?;

    let overlay = Settings::load(&settings::settings_location(env))?;
    let resolved = resolve(env, overlay.as_ref())?;

    for dir in resolved.project_dirs(name) {
        workspace.ensure_dir(&dir).into_result()?;
    }
    workspace.write_marker(&resolved.marker_path(), name)?;

    Ok(name.to_string())
}

/// The active project: environment variable first, marker file second,
/// `"default"` last. Never fails; the absence of both sources is normal.
pub fn current_project<E, W>(env: &E, workspace: &W) -> String
where
    E: EnvSource,
    W: UserWorkspace,
{
    if let Some(name) = env.non_empty(PROJECT_ENV) {
        return name;
    }

    let marker = Settings::load(&settings::settings_location(env))
        .ok()
        .and_then(|overlay| resolve(env, overlay.as_ref()).ok())
        .and_then(|resolved| workspace.read_marker(&resolved.marker_path()));

    marker.unwrap_or_else(|| DEFAULT_PROJECT.to_string())
}
