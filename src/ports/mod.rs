//! Port definitions: the seams between the commands and the outside
//! world (process environment, user filesystem, the external engine).

pub mod engine;
pub mod workspace;

pub use engine::{BatchEngine, MockBatchEngine};
pub use workspace::{DirOutcome, UserWorkspace};
