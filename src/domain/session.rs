//! Typed session descriptors for the batch processing engine.
//!
//! Every field the engine needs is required at construction, so a
//! descriptor can never reach the engine half-configured. A descriptor
//! belongs to exactly one launch attempt and is dropped afterwards.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::AppError;

/// Processing control file driving a final session.
pub const PCF_FILE: &str = "FINAL";
/// Execution profile handed to the engine.
pub const CPU_FILE: &str = "UNIX";
/// Campaign directory name under the campaign root.
pub const CAMPAIGN_NAME: &str = "FINAL";
/// Output-stream name for engine logs.
pub const SYSOUT: &str = "FINAL";
/// Status-tracking file name inside the campaign.
pub const STATUS_FILE: &str = "FINAL.RUN";
/// Two-character task identifier stamped on engine jobs.
pub const TASK_ID: &str = "FN";

/// Four-digit processing year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(u16);

impl Year {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidYear(raw.to_string());
        let year: u16 = raw.parse().map_err(|_| invalid())?;
        if !(1980..=2100).contains(&year) || raw.len() != 4 {
            return Err(invalid());
        }
        Ok(Year(year))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Four-character session code, day-of-year plus a sub-session character
/// (e.g. `0010` for DOY 001, sub-session 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCode(String);

impl SessionCode {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.len() != 4 || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidSession(raw.to_string()));
        }
        Ok(SessionCode(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one engine session needs, fully populated.
#[derive(Debug, Clone)]
pub struct SessionDescriptor {
    pub pcf_file: String,
    pub cpu_file: String,
    pub campaign: PathBuf,
    pub year: Year,
    pub session: SessionCode,
    pub sysout: String,
    pub status_file: String,
    pub task_id: String,
}

impl SessionDescriptor {
    /// Build a final-processing descriptor for `year`/`session` in the
    /// campaign area under `campaign_root`.
    pub fn finals(year: Year, session: SessionCode, campaign_root: PathBuf) -> Self {
        SessionDescriptor {
            pcf_file: PCF_FILE.to_string(),
            cpu_file: CPU_FILE.to_string(),
            campaign: campaign_root.join(CAMPAIGN_NAME),
            year,
            session,
            sysout: SYSOUT.to_string(),
            status_file: STATUS_FILE.to_string(),
            task_id: TASK_ID.to_string(),
        }
    }
}

/// What the engine reports after a run. The launcher only acts on
/// `error_status`; `detail` is passed through to the user verbatim.
#[derive(Debug, Clone, Default)]
pub struct EngineStatus {
    pub error_status: bool,
    pub detail: Option<String>,
}
