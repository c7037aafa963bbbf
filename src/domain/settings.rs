//! Optional site settings overlay.
//!
//! A site can re-root the installation through
//! `<config_dir>/config.yaml`. Values sit between environment variables
//! and the built-in defaults, and support `${main}`, `${HOME}` and
//! `${USER}` placeholders plus a leading `~`. Unknown placeholders are
//! left intact rather than erased.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::environment::{DEFAULT_PREFIX, EnvSource, vars};
use crate::domain::error::AppError;

/// Site-wide settings file contents. Every field is optional; a missing
/// file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Overrides the installation prefix.
    pub main: Option<String>,
    #[serde(default)]
    pub paths: InstallPaths,
    #[serde(default)]
    pub user_workspace: UserWorkspacePaths,
    #[serde(default)]
    pub externals: Externals,
}

/// Installation-side path overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallPaths {
    pub source: Option<String>,
    pub external: Option<String>,
    pub configuration: Option<String>,
    pub webpage: Option<String>,
    pub documentation: Option<String>,
}

/// Per-user workspace overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserWorkspacePaths {
    pub root: Option<String>,
    pub database: Option<String>,
    pub workpool: Option<String>,
    pub help: Option<String>,
}

/// Roots of the external collaborators the launcher talks to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Externals {
    /// Batch-processing-engine installation root.
    pub engine: Option<String>,
    /// Campaign area root.
    pub campaign: Option<String>,
}

impl Settings {
    /// Load the settings file at `path`. A missing file is normal and
    /// yields `None`; an unreadable or malformed file is a configuration
    /// error.
    pub fn load(path: &Path) -> Result<Option<Settings>, AppError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::configuration(format!(
                    "Cannot read settings file {}: {err}",
                    path.display()
                )));
            }
        };
        let settings = serde_yaml::from_str(&raw).map_err(|err| {
            AppError::configuration(format!("Malformed settings file {}: {err}", path.display()))
        })?;
        Ok(Some(settings))
    }
}

/// Where the settings file lives for the given environment: an explicit
/// `GEOMON_CONFIG` wins, otherwise `<prefix>/configuration`.
pub fn settings_location(env: &impl EnvSource) -> PathBuf {
    let config_dir = env
        .non_empty(vars::CONFIG)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env.non_empty(vars::PREFIX)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFIX))
                .join("configuration")
        });
    config_dir.join("config.yaml")
}

/// Expand `${main}`, `${HOME}`, `${USER}` and a leading `~` in a settings
/// value. Placeholders without a known substitution stay verbatim.
pub fn expand(value: &str, main: Option<&str>, home: &str, user: &str) -> String {
    let mut out = value.to_string();
    if let Some(main) = main {
        out = out.replace("${main}", main);
    }
    out = out.replace("${HOME}", home);
    out = out.replace("${USER}", user);
    if out == "~" {
        out = home.to_string();
    } else if let Some(rest) = out.strip_prefix("~/") {
        out = format!("{home}/{rest}");
    }
    out
}
