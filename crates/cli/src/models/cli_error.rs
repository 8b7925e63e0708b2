use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Recipient invalid: {underlying}")]
    RecipientInvalid { underlying: InvalidAddressError },

    #[error("Amount must be positive")]
    AmountMustBePositive,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),
}
