#[allow(clippy::module_inception)]
mod cli_args;
mod mint_args;

pub use cli_args::*;
pub use mint_args::*;
