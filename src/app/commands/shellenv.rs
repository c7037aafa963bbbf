//! Emit the environment block for evaluation by the calling shell
//! (`eval "$(geomon shellenv)"`). Same body as the persisted block,
//! without the delimiting markers.

use crate::domain::environment::EnvSource;
use crate::domain::settings::{self, Settings};
use crate::domain::{AppError, resolve};
use crate::services::render_profile_body;

pub fn execute<E: EnvSource>(env: &E, include_aliases: bool) -> Result<String, AppError> {
    let overlay = Settings::load(&settings::settings_location(env))?;
    let resolved = resolve(env, overlay.as_ref())?;
    render_profile_body(&resolved, include_aliases)
}
