use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Display)]
#[display("{amount} to {address}")]
pub struct TransactionOutput {
    #[getset(get = "pub")]
    address: Address,

    #[getset(get = "pub")]
    amount: Value,
}

impl TransactionOutput {
    pub fn new(address: Address, amount: impl Into<Value>) -> Self {
        Self {
            address,
            amount: amount.into(),
        }
    }
}
