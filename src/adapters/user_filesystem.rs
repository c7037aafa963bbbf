//! Filesystem-backed `UserWorkspace` implementation.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{DirOutcome, UserWorkspace};

#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemWorkspace;

impl UserWorkspace for FilesystemWorkspace {
    fn ensure_dir(&self, path: &Path) -> DirOutcome {
        if path.is_dir() {
            return DirOutcome::AlreadyExists;
        }
        match fs::create_dir_all(path) {
            Ok(()) => DirOutcome::Created,
            Err(err) => DirOutcome::Failed(err),
        }
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_marker(&self, path: &Path) -> Option<String> {
        let content = fs::read_to_string(path).ok()?;
        let name = content.trim();
        if name.is_empty() { None } else { Some(name.to_string()) }
    }

    fn write_marker(&self, path: &Path, project: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{project}\n"))?;
        Ok(())
    }

    fn read_profile(&self, path: &Path) -> Result<String, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn write_profile(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
