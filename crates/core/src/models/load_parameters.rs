use crate::prelude::*;

/// Number of mints simulated when the caller does not say otherwise.
pub const DEFAULT_LOAD_FACTOR: usize = 100;

/// Pause after every submission.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Getters, Builder)]
pub struct LoadParameters {
    #[getset(get = "pub")]
    #[builder(default = DEFAULT_LOAD_FACTOR)]
    load_factor: usize,

    #[getset(get = "pub")]
    recipient: Address,

    /// Defaults to [`Value::ONE`].
    #[getset(get = "pub")]
    #[builder(into, default = Value::ONE)]
    amount: Value,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_INTERVAL)]
    interval: Duration,
}

impl LoadParameters {
    /// 100 mints of one lovelace each to [`DEFAULT_RECIPIENT`], one second apart.
    pub fn try_default() -> Result<Self, InvalidAddressError> {
        let recipient = Address::from_bech32(DEFAULT_RECIPIENT)?;
        Ok(Self::builder().recipient(recipient).build())
    }

    /// The request for the mint at `index`. Only the [`NftId`] depends on the
    /// index.
    pub fn mint_request(&self, index: usize) -> MintRequest {
        MintRequest::builder()
            .recipient(self.recipient.clone())
            .amount(self.amount)
            .nft_id(index)
            .build()
    }
}
