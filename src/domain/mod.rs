//! Core types for environment resolution, profile persistence, and
//! session launching. Everything here is filesystem-free except the
//! settings loader; I/O lives behind the ports.

pub mod environment;
pub mod error;
pub mod profile;
pub mod project;
pub mod search_path;
pub mod session;
pub mod settings;

pub use environment::{EnvSource, MapEnv, ResolvedEnvironment, resolve};
pub use error::AppError;
pub use session::{EngineStatus, SessionCode, SessionDescriptor, Year};
pub use settings::Settings;
