use crate::prelude::*;
use clap::Parser;

pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Parser, Debug)]
pub struct MintArgs {
    /// Number of simulated mints, one transaction each.
    #[arg(long, default_value_t = DEFAULT_LOAD_FACTOR)]
    load_factor: usize,

    /// Bech32 address every mint pays to.
    #[arg(long, default_value_t = DEFAULT_RECIPIENT.to_owned())]
    recipient: String,

    /// Lovelace paid by each mint output.
    #[arg(long, default_value_t = 1)]
    amount: u64,

    /// Pause after each submission, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,
}

impl TryFrom<MintArgs> for LoadParameters {
    type Error = InvalidCliArgs;

    fn try_from(args: MintArgs) -> Result<Self, Self::Error> {
        let recipient = Address::from_bech32(&args.recipient)
            .map_err(|underlying| InvalidCliArgs::RecipientInvalid { underlying })?;
        if args.amount == 0 {
            return Err(InvalidCliArgs::AmountMustBePositive);
        }

        Ok(LoadParameters::builder()
            .load_factor(args.load_factor)
            .recipient(recipient)
            .amount(args.amount)
            .interval(Duration::from_millis(args.interval_ms))
            .build())
    }
}
