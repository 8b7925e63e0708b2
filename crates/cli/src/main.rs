mod logic;
mod models;

mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    pub use nft_mint_load_core::prelude::*;
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    use clap::Parser as _;
    use prelude::*;

    init_logging();
    let cli_args = CliArgs::parse();
    match run(cli_args).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(_) => std::process::ExitCode::FAILURE,
    }
}
