//! Batch-processing-engine port definition.

use chrono::Local;

use crate::domain::{AppError, EngineStatus, SessionDescriptor};

/// Port for the external batch processing engine.
///
/// `reset_control_state` clears leftover task-control state from a
/// previous run with the same execution profile and must be invoked
/// before every `run`. `run` is a single opaque blocking call; the
/// launcher neither retries nor times it out.
pub trait BatchEngine {
    fn reset_control_state(&self, session: &SessionDescriptor) -> Result<(), AppError>;

    fn run(&self, session: &SessionDescriptor) -> Result<EngineStatus, AppError>;
}

/// Mock engine for exercising launches without the external installation.
#[derive(Debug, Clone, Default)]
pub struct MockBatchEngine {
    fail: bool,
}

impl MockBatchEngine {
    /// Mock whose run outcome is controlled by `GEOMON_MOCK_ERROR=1`.
    pub fn from_env() -> Self {
        let fail = std::env::var("GEOMON_MOCK_ERROR").is_ok_and(|v| v == "1");
        MockBatchEngine { fail }
    }
}

impl BatchEngine for MockBatchEngine {
    fn reset_control_state(&self, session: &SessionDescriptor) -> Result<(), AppError> {
        println!("=== MOCK MODE ===");
        println!("Would reset control state:");
        println!("  CPU file: {}", session.cpu_file);
        println!("  Task id:  {}", session.task_id);
        Ok(())
    }

    fn run(&self, session: &SessionDescriptor) -> Result<EngineStatus, AppError> {
        println!("Would run session:");
        println!("  PCF:      {}", session.pcf_file);
        println!("  Campaign: {}", session.campaign.display());
        println!("  Session:  {}/{}", session.year, session.session);
        println!("  Sysout:   {}", session.sysout);
        println!("  Started:  {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

        Ok(EngineStatus {
            error_status: self.fail,
            detail: self.fail.then(|| "mock run flagged as failed".to_string()),
        })
    }
}
