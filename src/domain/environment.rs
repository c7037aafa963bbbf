//! Suite directory layout resolution.
//!
//! Installation paths derive from a shared prefix (read-mostly, usually
//! `/opt/geomon`); per-user state derives from `$HOME`. The two bases are
//! independent: overriding one never moves the other.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::error::AppError;
use crate::domain::project::MARKER_FILE;
use crate::domain::settings::{self, Settings};

/// Default installation prefix when neither the environment nor the
/// settings file says otherwise.
pub const DEFAULT_PREFIX: &str = "/opt/geomon";

/// Environment variable names, one per configuration key.
pub mod vars {
    pub const PREFIX: &str = "GEOMON_PREFIX";
    pub const SOURCE: &str = "GEOMON_SOURCE";
    pub const EXTERNAL: &str = "GEOMON_EXTERNAL";
    pub const CONFIG: &str = "GEOMON_CONFIG";
    pub const WEB: &str = "GEOMON_WEB";
    pub const DOCS: &str = "GEOMON_DOCS";
    pub const DATABASE: &str = "GEOMON_DB";
    pub const WORKPOOL: &str = "GEOMON_WORKPOOL";
    pub const HELP: &str = "GEOMON_HELP";
    pub const USER_ROOT: &str = "GEOMON_USER";
    pub const METADATA: &str = "GEOMON_META";
}

/// Read-only view of an environment variable source.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key` if set and non-empty. An empty string counts as
    /// absent, so `GEOMON_PREFIX= geomon init` falls back to defaults.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Map-backed environment source for exercising resolution without
/// touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Fully resolved suite layout.
///
/// Constructed once per invocation and passed explicitly to every
/// downstream component; nothing consults the process environment after
/// this point.
#[derive(Debug, Clone)]
pub struct ResolvedEnvironment {
    pub prefix: PathBuf,
    pub source: PathBuf,
    pub external: PathBuf,
    pub config_dir: PathBuf,
    pub web: PathBuf,
    pub docs: PathBuf,
    pub database: PathBuf,
    pub workpool: PathBuf,
    pub help_dir: PathBuf,
    pub user_root: PathBuf,
    pub metadata: PathBuf,
}

impl ResolvedEnvironment {
    /// Export statements in their canonical order, as `(variable, value)`
    /// pairs. The order is stable so persisted profile blocks diff cleanly.
    pub fn exports(&self) -> Vec<(&'static str, String)> {
        vec![
            (vars::PREFIX, display(&self.prefix)),
            (vars::SOURCE, display(&self.source)),
            (vars::EXTERNAL, display(&self.external)),
            (vars::CONFIG, display(&self.config_dir)),
            (vars::WEB, display(&self.web)),
            (vars::DOCS, display(&self.docs)),
            (vars::DATABASE, display(&self.database)),
            (vars::WORKPOOL, display(&self.workpool)),
            (vars::HELP, display(&self.help_dir)),
            (vars::USER_ROOT, display(&self.user_root)),
            (vars::METADATA, display(&self.metadata)),
        ]
    }

    /// Candidate `PATH` entries in append order: the suite tool
    /// directories under the source root, then the external-tools root.
    pub fn path_candidates(&self) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = ["database", "processing", "analysis", "alert", "common"]
            .iter()
            .map(|sub| self.source.join(sub))
            .collect();
        candidates.push(self.external.clone());
        candidates
    }

    /// Directory importable tooling must see on the module search path.
    pub fn module_dir(&self) -> &Path {
        &self.source
    }

    /// Per-user directories created (best-effort) at bootstrap.
    pub fn user_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![
            self.user_root.clone(),
            self.workpool.clone(),
            self.workpool.join("logs"),
            self.help_dir.clone(),
            self.metadata.clone(),
        ];
        if let Some(parent) = self.database.parent() {
            dirs.push(parent.to_path_buf());
        }
        dirs
    }

    /// The active-project marker file.
    pub fn marker_path(&self) -> PathBuf {
        self.user_root.join(MARKER_FILE)
    }

    /// Output directories belonging to one project.
    pub fn project_dirs(&self, project: &str) -> [PathBuf; 2] {
        let root = self.workpool.join(project);
        [root.join("outputs"), root.join("logs")]
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Resolve the suite layout from the environment, an optional settings
/// overlay, and built-in defaults.
///
/// Precedence per key: non-empty environment variable, then the settings
/// file (placeholder-expanded), then the default formula. Derived defaults
/// follow the *resolved* base, so overriding the prefix or the user root
/// moves everything computed from it.
pub fn resolve(env: &impl EnvSource, overlay: Option<&Settings>) -> Result<ResolvedEnvironment, AppError> {
    let home = env
        .non_empty("HOME")
        .ok_or_else(|| AppError::configuration("HOME environment variable not set"))?;
    let user = env.non_empty("USER").unwrap_or_default();

    let prefix: PathBuf = env
        .non_empty(vars::PREFIX)
        .or_else(|| {
            overlay
                .and_then(|s| s.main.as_deref())
                .map(|raw| settings::expand(raw, None, &home, &user))
        })
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string())
        .into();
    let main = display(&prefix);

    let pick = |key: &str, from_settings: Option<&str>, default: PathBuf| -> PathBuf {
        env.non_empty(key)
            .map(PathBuf::from)
            .or_else(|| {
                from_settings.map(|raw| PathBuf::from(settings::expand(raw, Some(&main), &home, &user)))
            })
            .unwrap_or(default)
    };

    let paths = overlay.map(|s| &s.paths);
    let workspace = overlay.map(|s| &s.user_workspace);

    let user_root = pick(
        vars::USER_ROOT,
        workspace.and_then(|w| w.root.as_deref()),
        PathBuf::from(&home).join("geomon"),
    );

    Ok(ResolvedEnvironment {
        source: pick(
            vars::SOURCE,
            paths.and_then(|p| p.source.as_deref()),
            prefix.join("source"),
        ),
        external: pick(
            vars::EXTERNAL,
            paths.and_then(|p| p.external.as_deref()),
            prefix.join("external"),
        ),
        config_dir: pick(
            vars::CONFIG,
            paths.and_then(|p| p.configuration.as_deref()),
            prefix.join("configuration"),
        ),
        web: pick(
            vars::WEB,
            paths.and_then(|p| p.webpage.as_deref()),
            prefix.join("webpage"),
        ),
        docs: pick(
            vars::DOCS,
            paths.and_then(|p| p.documentation.as_deref()),
            prefix.join("documentation"),
        ),
        database: pick(
            vars::DATABASE,
            workspace.and_then(|w| w.database.as_deref()),
            user_root.join("database").join("geomon.db"),
        ),
        workpool: pick(
            vars::WORKPOOL,
            workspace.and_then(|w| w.workpool.as_deref()),
            user_root.join("workpool"),
        ),
        help_dir: pick(
            vars::HELP,
            workspace.and_then(|w| w.help.as_deref()),
            user_root.join("help"),
        ),
        metadata: pick(vars::METADATA, None, user_root.join("metadata")),
        user_root,
        prefix,
    })
}
