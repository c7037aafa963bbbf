//! User-workspace filesystem port.

use std::io;
use std::path::Path;

use crate::domain::AppError;

/// Result of a best-effort directory creation. Bootstrap policy ignores
/// `Failed`, but the distinction stays visible so callers and tests can
/// see what actually happened.
#[derive(Debug)]
pub enum DirOutcome {
    Created,
    AlreadyExists,
    Failed(io::Error),
}

impl DirOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DirOutcome::Failed(_))
    }

    /// Convert to a hard error for callers that must not proceed without
    /// the directory (project layout, as opposed to bootstrap).
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            DirOutcome::Created | DirOutcome::AlreadyExists => Ok(()),
            DirOutcome::Failed(err) => Err(AppError::Io(err)),
        }
    }
}

/// Filesystem surface the commands go through: directory creation, the
/// project marker, and the shell profile.
pub trait UserWorkspace {
    /// Recursively create `path`, reporting what happened instead of
    /// failing.
    fn ensure_dir(&self, path: &Path) -> DirOutcome;

    /// Directory-existence probe used when extending search paths.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Trimmed marker content, or `None` when absent or unreadable.
    fn read_marker(&self, path: &Path) -> Option<String>;

    /// Overwrite the marker with the project name.
    fn write_marker(&self, path: &Path, project: &str) -> Result<(), AppError>;

    /// Profile content; a missing profile reads as empty.
    fn read_profile(&self, path: &Path) -> Result<String, AppError>;

    fn write_profile(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
