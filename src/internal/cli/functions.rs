pub mod init_tracing;
pub mod run;

pub use init_tracing::init_tracing;
pub use run::{run, truncate_progress_log};
