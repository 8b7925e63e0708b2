use crate::prelude::*;

async fn run_mint(args: MintArgs) -> Result<(), CliError> {
    let parameters = LoadParameters::try_from(args)?;
    let generator = LoadGenerator::builder()
        .parameters(parameters)
        .submitter(DryRunSubmitter)
        .build();
    generator.run().await.map_err(CliError::CoreError)
}

async fn run_subcommand(command: Command) -> Result<(), CliError> {
    match command {
        Command::Mint(mint_args) => run_mint(mint_args).await,
    }
}

pub async fn run(cli_args: CliArgs) -> Result<(), CliError> {
    run_subcommand(cli_args.command)
        .await
        .inspect(|_| info!("{} ran successfully", BINARY_NAME))
        .inspect_err(|e| error!("Error running {}: {}", BINARY_NAME, e))
}
