//! Active-project naming and validation.

use crate::domain::error::AppError;

/// Marker file under the user root recording the active project name.
pub const MARKER_FILE: &str = ".current_project";

/// Environment variable mirroring the active project.
pub const PROJECT_ENV: &str = "GEOMON_PROJECT";

/// Project assumed when neither the environment nor the marker file says
/// otherwise.
pub const DEFAULT_PROJECT: &str = "default";

/// Validate a project name: non-empty and usable as a single path
/// component under the workpool.
pub fn validate_name(name: &str) -> Result<&str, AppError> {
    let invalid = || AppError::InvalidProjectName(name.to_string());

    if name.trim().is_empty() {
        return Err(invalid());
    }
    if name == "." || name == ".." {
        return Err(invalid());
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(invalid());
    }
    Ok(name)
}
