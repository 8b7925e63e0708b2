mod dry_run_submitter;
mod load_generator;
mod transaction_builder;

pub use dry_run_submitter::*;
pub use transaction_builder::*;
