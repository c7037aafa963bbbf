//! geomon: bootstrap the GeoMonitor suite environment and launch
//! processing-engine sessions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::io::{IsTerminal, stdin};
use std::path::Path;

use adapters::{FilesystemWorkspace, ProcessEnv, ShellEngine};
use app::commands::{init, launch, project, shellenv};
use domain::environment::EnvSource;
use domain::settings::{self, Settings};
use domain::{ResolvedEnvironment, SessionCode, SessionDescriptor, Year, search_path, resolve};
use ports::MockBatchEngine;

pub use app::commands::init::{InitOptions, InitReport, PersistOutcome};
pub use app::commands::launch::LaunchOutcome;
pub use domain::AppError;

/// Resolve the suite environment, create the per-user directories, print
/// the bootstrap summary, and optionally persist the profile block.
pub fn init(options: InitOptions) -> Result<(), AppError> {
    let assume_yes = options.assume_yes;
    let report = init::execute(&ProcessEnv, &FilesystemWorkspace, &options, |profile| {
        confirm_persist(profile, assume_yes)
    })?;

    println!("{}", init::summary(&report.resolved));
    match &report.persist {
        Some(PersistOutcome::Applied(path)) => {
            println!("✅ Environment block appended to {}", path.display());
        }
        Some(PersistOutcome::AlreadyConfigured(path)) => {
            println!("Profile {} already configured; nothing written.", path.display());
        }
        Some(PersistOutcome::Declined(path)) => {
            println!("Skipped writing {}.", path.display());
        }
        None => {}
    }
    Ok(())
}

/// Print the environment block for the calling shell to evaluate.
pub fn shellenv(no_aliases: bool) -> Result<(), AppError> {
    let body = shellenv::execute(&ProcessEnv, !no_aliases)?;
    print!("{body}");
    Ok(())
}

/// Activate a project.
pub fn project_use(name: &str) -> Result<(), AppError> {
    let active = project::use_project(&ProcessEnv, &FilesystemWorkspace, name)?;
    println!("✅ Active project: {active}");
    Ok(())
}

/// Print the active project name.
pub fn project_current() -> Result<(), AppError> {
    println!("{}", project::current_project(&ProcessEnv, &FilesystemWorkspace));
    Ok(())
}

/// Launch one engine session for `<year> <session>`.
pub fn run(year: &str, session: &str, mock: bool) -> Result<(), AppError> {
    let env = ProcessEnv;
    let year = Year::parse(year)?;
    let session = SessionCode::parse(session)?;

    let overlay = Settings::load(&settings::settings_location(&env))?;
    let resolved = resolve(&env, overlay.as_ref())?;
    let descriptor =
        SessionDescriptor::finals(year, session, launch::campaign_root(&resolved, overlay.as_ref()));

    let outcome = if mock {
        launch::execute(&MockBatchEngine::from_env(), descriptor)?
    } else {
        let engine = ShellEngine::new(launch::engine_root(&resolved, overlay.as_ref()))
            .with_search_path(child_search_path(&env, &resolved));
        launch::execute(&engine, descriptor)?
    };

    println!(
        "✅ Session {} completed at {}",
        outcome.descriptor.session,
        outcome.completed_at.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

/// The launcher's `PATH` for engine child processes: the caller's value
/// extended, idempotently, with the suite's tool directories.
fn child_search_path(env: &impl EnvSource, resolved: &ResolvedEnvironment) -> String {
    let current = env.var("PATH").unwrap_or_default();
    search_path::extend(&current, &resolved.path_candidates(), |dir| dir.is_dir())
}

fn confirm_persist(profile: &Path, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes || !stdin().is_terminal() {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("Append environment block to {}?", profile.display()))
        .default(true)
        .interact()
        .map_err(|err| AppError::Configuration(format!("confirmation prompt failed: {err}")))
}
