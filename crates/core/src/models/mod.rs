mod address;
mod error;
mod load_generator;
mod load_parameters;
mod mint_request;
mod traits;
mod transaction;
mod value;

pub use address::*;
pub use error::*;
pub use load_generator::*;
pub use load_parameters::*;
pub use mint_request::*;
pub use traits::*;
pub use transaction::*;
pub use value::*;
