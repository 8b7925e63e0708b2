use crate::prelude::*;

/// Synthetic identifier of a simulated mint, `nft_<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Display)]
#[display("nft_{_0}")]
pub struct NftId(usize);

/// Everything one iteration of the load generator needs to build its
/// transaction. The [`NftId`] is only used for logging, it is not part of the
/// transaction output.
#[derive(Debug, Clone, Getters, Builder)]
pub struct MintRequest {
    #[getset(get = "pub")]
    recipient: Address,

    #[getset(get = "pub")]
    #[builder(into)]
    amount: Value,

    #[getset(get = "pub")]
    #[builder(into)]
    nft_id: NftId,
}

impl MintRequest {
    pub fn into_transaction(self) -> Result<Transaction, BuildTransactionError> {
        let mut builder = TransactionBuilder::new();
        builder.add_output(TransactionOutput::new(self.recipient, self.amount));
        builder.build()
    }
}
