mod finalized;
mod transaction_output;

pub use finalized::*;
pub use transaction_output::*;
