mod submit_transaction;
mod to_debug_string;

pub use submit_transaction::*;
pub use to_debug_string::*;
