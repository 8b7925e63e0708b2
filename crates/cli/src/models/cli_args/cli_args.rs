use crate::prelude::*;
use clap::{Parser, Subcommand};

pub const BINARY_NAME: &str = "nft-mint-load";

/// Simulates bulk NFT minting load by building and submitting one payment
/// transaction per mint, pausing between submissions.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit `load-factor` mint transactions, one after the other.
    Mint(MintArgs),
}
