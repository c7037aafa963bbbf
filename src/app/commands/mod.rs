//! One module per subcommand. Each `execute` is generic over the ports
//! so tests can inject in-memory or recording implementations.

pub mod init;
pub mod launch;
pub mod project;
pub mod shellenv;
