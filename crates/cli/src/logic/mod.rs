mod init_logging;
mod run;

pub use init_logging::*;
pub use run::*;
